use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only key/value lookup backing the accessors
///
/// `None` means the key is absent, which is a normal outcome and never an error.
pub trait Source {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    /// Values that are not valid Unicode are still present and are converted lossily.
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<H: BuildHasher> Source for HashMap<String, String, H> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Look up a variable in the process environment
pub fn lookup(key: &str) -> Option<String> {
    ProcessEnv.lookup(key)
}
