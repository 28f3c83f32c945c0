// contacts_core/src/domain.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

macro_rules! text_field {
    ($name:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

text_field!(Name);
text_field!(Phone);
text_field!(Email);
text_field!(Address);
text_field!(Tag);

/// A contact. Two persons are the same record when every field matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for t in &self.tags {
                write!(f, "[{t}]")?;
            }
        }
        Ok(())
    }
}
