//! Registry of mounted code fields
//!
//! The host passes one registry to every field it mounts. Fields register
//! under their field name and drop out on teardown. Notifications use the
//! count to decide whether to name the field in a message.

/// Mounted field names with a mount count each
#[derive(Debug, Clone, Default)]
pub struct EditorRegistry {
    fields: Vec<(String, usize)>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mount under `field_name`. Returns false if the name was
    /// already mounted; the mount still counts until it is unregistered.
    pub fn register(&mut self, field_name: &str) -> bool {
        if let Some((_, count)) = self.fields.iter_mut().find(|(name, _)| name == field_name) {
            *count += 1;
            tracing::warn!("Field '{}' mounted {} times", field_name, count);
            return false;
        }
        self.fields.push((field_name.to_string(), 1));
        true
    }

    /// Drop one mount of `field_name`; the name goes once no mount is left
    pub fn unregister(&mut self, field_name: &str) {
        if let Some((_, count)) = self.fields.iter_mut().find(|(name, _)| name == field_name) {
            *count -= 1;
        }
        self.fields.retain(|(_, count)| *count > 0);
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field_name)
    }

    /// Number of mounted fields
    pub fn len(&self) -> usize {
        self.fields.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when more than one field is mounted
    pub fn is_shared(&self) -> bool {
        self.len() > 1
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}
