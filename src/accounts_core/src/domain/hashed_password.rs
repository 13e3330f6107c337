use secrecy::{ExposeSecret, Secret};

/// One-way hash of a password in PHC string format. The salt is embedded in
/// the string, so verification needs nothing else.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(phc: Secret<String>) -> Self {
        Self(phc)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for HashedPassword {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for HashedPassword {}
