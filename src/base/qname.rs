use std::fmt;

use smol_str::SmolStr;

/// A namespace-qualified name.
///
/// An empty `namespace` means the name is in no namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QName {
    pub namespace: SmolStr,
    pub local: SmolStr,
}

impl QName {
    pub fn new(namespace: impl Into<SmolStr>, local: impl Into<SmolStr>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// A name in no namespace.
    pub fn local(local: impl Into<SmolStr>) -> Self {
        Self::new(SmolStr::default(), local)
    }

    pub fn namespace(&self) -> Option<&str> {
        (!self.namespace.is_empty()).then_some(self.namespace.as_str())
    }

    pub fn local_name(&self) -> &str {
        &self.local
    }

    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace == namespace
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

impl From<&str> for QName {
    fn from(local: &str) -> Self {
        Self::local(local)
    }
}

impl From<(&str, &str)> for QName {
    fn from((namespace, local): (&str, &str)) -> Self {
        Self::new(namespace, local)
    }
}
