/// Identifier assigned by the store. `0` means the record has not been
/// persisted yet and the store will generate an id on insert.
pub type ID = i64;

pub trait Entity {
    fn id(&self) -> ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
