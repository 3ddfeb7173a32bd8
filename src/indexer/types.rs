//! Index records produced by a crawl.

use std::fmt;

use indexmap::IndexSet;

use crate::{
    descriptor::{decode_member, normalize_member_name},
    Result,
};

/// One retained member of a bound Java type
///
/// Two registrations with the same name and signature are the same member, which is what
/// lets redundant declarations collapse inside an [`IndexedType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisteredMember {
    name: String,
    signature: Option<String>,
}

impl RegisteredMember {
    /// Creates a member; the .NET constructor name `.ctor` is stored as `<init>`
    #[must_use]
    pub fn new(name: &str, signature: Option<&str>) -> Self {
        RegisteredMember {
            name: normalize_member_name(name).to_string(),
            signature: signature.map(str::to_string),
        }
    }

    /// Java member name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compact JNI signature, `None` for plain field-like registrations
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns true if this member carries no signature
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.signature.is_none()
    }

    /// Decodes the member into a Java declaration
    ///
    /// Plain members have nothing to decode and return `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedDescriptor`] if the stored signature is invalid.
    pub fn decode(&self) -> Result<Option<String>> {
        self.signature
            .as_deref()
            .map(|signature| decode_member(&self.name, signature))
            .transpose()
    }
}

/// A bound Java type and the members retained for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedType {
    external_name: String,
    members: IndexSet<RegisteredMember>,
}

impl IndexedType {
    /// Creates an entry without members
    #[must_use]
    pub fn new(external_name: &str) -> Self {
        IndexedType {
            external_name: external_name.to_string(),
            members: IndexSet::new(),
        }
    }

    /// The registered name, slash separated (`android/view/View`)
    #[must_use]
    pub fn external_name(&self) -> &str {
        &self.external_name
    }

    /// The registered name in dotted Java form (`android.view.View`)
    #[must_use]
    pub fn java_name(&self) -> String {
        self.external_name.replace('/', ".")
    }

    /// Adds a member, returning false if an equal one was already present
    pub fn insert(&mut self, member: RegisteredMember) -> bool {
        self.members.insert(member)
    }

    /// Returns true if an equal member is present
    #[must_use]
    pub fn contains(&self, member: &RegisteredMember) -> bool {
        self.members.contains(member)
    }

    /// All members, in the order they were first discovered
    pub fn members(&self) -> impl Iterator<Item = &RegisteredMember> {
        self.members.iter()
    }

    /// Members that carry a signature
    pub fn signed_members(&self) -> impl Iterator<Item = &RegisteredMember> {
        self.members.iter().filter(|member| !member.is_plain())
    }

    /// Returns true if at least one member has no signature
    #[must_use]
    pub fn has_plain_members(&self) -> bool {
        self.members.iter().any(RegisteredMember::is_plain)
    }

    /// Number of distinct members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no member was registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for IndexedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.java_name())
    }
}
