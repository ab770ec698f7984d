use super::CursorShape;

/// Host-side collaborator for pointer concerns the slider cannot own.
///
/// The slider subscribes once at construction; from then on the host must
/// route every pointer-up seen at application-root scope to the slider's
/// `pointer_up`, so drags released outside the strip still commit.
pub trait PointerHost {
    fn set_global_cursor(&mut self, cursor: CursorShape);
    fn subscribe_global_pointer_up(&mut self);
}

/// Host that ignores cursor requests; used headless and in tests.
#[derive(Debug, Default)]
pub struct NullPointerHost;

impl PointerHost for NullPointerHost {
    fn set_global_cursor(&mut self, _cursor: CursorShape) {}

    fn subscribe_global_pointer_up(&mut self) {}
}
