use super::Declaration;

/// Something that yields the ordered declaration list of a schema.
///
/// Parsers implement this for their output. A parser failure is returned as
/// an [`anyhow::Error`] and aborts catalog construction; it reaches the caller
/// unchanged inside [`crate::Error`].
pub trait Source {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>>;
}

impl Source for Vec<Declaration> {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>> {
        Ok(self)
    }
}

impl Source for &[Declaration] {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>> {
        Ok(self.to_vec())
    }
}

impl<const N: usize> Source for [Declaration; N] {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>> {
        Ok(self.into())
    }
}

impl<S: Source> Source for anyhow::Result<S> {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>> {
        self?.declarations()
    }
}

impl Source for &Vec<Declaration> {
    fn declarations(self) -> anyhow::Result<Vec<Declaration>> {
        Ok(self.clone())
    }
}
