use crate::Result;
use psa_types::ContainerRecord;

/// Anything that can produce a full container listing.
///
/// Implementations block until the listing is available; every call returns
/// a fresh snapshot.
pub trait ContainerSource {
    fn list_all(&self) -> Result<Vec<ContainerRecord>>;
}

impl<S: ContainerSource + ?Sized> ContainerSource for &S {
    fn list_all(&self) -> Result<Vec<ContainerRecord>> {
        (**self).list_all()
    }
}

impl<S: ContainerSource + ?Sized> ContainerSource for Box<S> {
    fn list_all(&self) -> Result<Vec<ContainerRecord>> {
        (**self).list_all()
    }
}
