//! Schema registry.
//!
//! The registry is an explicit object, built once at startup and shared by
//! reference with whatever needs reflective encoding. It owns a
//! [`DescriptorPool`] and enforces the registration contract on top of it:
//!
//! - registering a file twice is a no-op,
//! - a file's imports must be registered before the file itself,
//! - every type a field references must resolve in the file or its imports,
//! - a type name belongs to exactly one file.

use crate::embedded::EmbeddedFile;
use crate::error::{DescriptorError, ReflectError, SchemaRegistrationError};
use parking_lot::RwLock;
use prost_reflect::{DescriptorPool, DynamicMessage, FileDescriptor, MessageDescriptor};
use prost_types::field_descriptor_proto::Type;
use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};

/// A registered message type.
#[derive(Debug, Clone)]
pub struct MessageEntry {
    /// Descriptor of the message.
    pub descriptor: MessageDescriptor,
    /// Name of the declaring file.
    pub file: String,
}

#[derive(Debug, Default)]
struct RegistryInner {
    pool: DescriptorPool,
    /// Registration order of files.
    order: Vec<String>,
}

/// Builder for configuring and creating a [`SchemaRegistry`].
///
/// # Example
/// ```ignore
/// let registry = SchemaRegistry::builder()
///     .file(&SUBSCRIPTION_LIST_PROTO)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    files: Vec<&'static EmbeddedFile>,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to register at build time, together with its imports.
    #[must_use]
    pub fn file(mut self, file: &'static EmbeddedFile) -> Self {
        self.files.push(file);
        self
    }

    /// Builds the registry and registers the queued files in order.
    ///
    /// # Errors
    /// Returns the first registration failure.
    pub fn build(self) -> Result<SchemaRegistry, SchemaRegistrationError> {
        let registry = SchemaRegistry::new();
        for file in self.files {
            registry.register_with_dependencies(file)?;
        }
        Ok(registry)
    }
}

/// Table of registered schema files and the types they declare.
///
/// Lookups take a shared lock and may run concurrently; registration takes
/// the exclusive lock. Descriptors handed out stay valid after later
/// registrations.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    inner: RwLock<RegistryInner>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registers an embedded file whose imports are already registered.
    ///
    /// # Errors
    /// Returns an error if the descriptor is corrupt, an import is missing,
    /// a referenced type does not resolve or a type name is taken.
    pub fn register(&self, file: &EmbeddedFile) -> Result<FileDescriptor, SchemaRegistrationError> {
        if let Some(existing) = self.file(file.name()) {
            tracing::debug!("Schema file {} already registered", file.name());
            return Ok(existing);
        }
        let descriptor = file
            .descriptor()
            .map_err(|e| SchemaRegistrationError::descriptor(file.name(), e))?;
        self.register_descriptor(&descriptor)
    }

    /// Registers an embedded file after recursively registering its imports,
    /// imports first.
    ///
    /// # Errors
    /// Returns the first failure among the file and its imports.
    pub fn register_with_dependencies(
        &self,
        file: &EmbeddedFile,
    ) -> Result<FileDescriptor, SchemaRegistrationError> {
        for dependency in file.dependencies() {
            self.register_with_dependencies(dependency)?;
        }
        self.register(file)
    }

    /// Registers an already decoded file descriptor.
    ///
    /// # Errors
    /// See [`SchemaRegistry::register`].
    pub fn register_descriptor(
        &self,
        file: &FileDescriptorProto,
    ) -> Result<FileDescriptor, SchemaRegistrationError> {
        let name = file.name();
        let mut inner = self.inner.write();

        // Another caller may have won the race since the read-locked check.
        if let Some(existing) = inner.pool.get_file_by_name(name) {
            tracing::debug!("Schema file {} already registered", name);
            return Ok(existing);
        }

        let added = validate(&inner.pool, file).and_then(|()| {
            inner
                .pool
                .add_file_descriptor_proto(file.clone())
                .map_err(|e| {
                    SchemaRegistrationError::descriptor(
                        name,
                        DescriptorError::Invalid {
                            message: e.to_string(),
                        },
                    )
                })
        });
        if let Err(e) = added {
            tracing::warn!("Rejected schema file {}: {}", name, e);
            return Err(e);
        }
        inner.order.push(name.to_string());

        let registered = inner.pool.get_file_by_name(name).ok_or_else(|| {
            SchemaRegistrationError::descriptor(
                name,
                DescriptorError::Invalid {
                    message: "file missing from pool after registration".to_string(),
                },
            )
        })?;
        tracing::debug!(
            "Registered schema file {} (package {}, {} messages)",
            name,
            registered.package_name(),
            registered.messages().count()
        );
        Ok(registered)
    }

    /// Returns a registered file by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<FileDescriptor> {
        self.inner.read().pool.get_file_by_name(name)
    }

    /// Returns a registered message by fully-qualified name.
    ///
    /// A leading dot, as used in field type references, is accepted.
    #[must_use]
    pub fn find_message(&self, full_name: &str) -> Option<MessageDescriptor> {
        self.inner.read().pool.get_message_by_name(normalize(full_name))
    }

    /// Returns the registry entry for a message, including its file.
    ///
    /// Accepts the same names as [`SchemaRegistry::find_message`].
    #[must_use]
    pub fn message_entry(&self, full_name: &str) -> Option<MessageEntry> {
        self.find_message(full_name).map(|descriptor| MessageEntry {
            file: descriptor.parent_file().name().to_string(),
            descriptor,
        })
    }

    /// Decodes `bytes` as the registered message `full_name`.
    ///
    /// # Errors
    /// Returns an error if the type is not registered or the bytes are
    /// malformed.
    pub fn decode(&self, full_name: &str, bytes: &[u8]) -> Result<DynamicMessage, ReflectError> {
        let descriptor =
            self.find_message(full_name)
                .ok_or_else(|| ReflectError::UnknownMessage {
                    name: full_name.to_string(),
                })?;
        Ok(DynamicMessage::decode(descriptor, bytes)?)
    }

    /// Returns true if a message or enum with this name is registered.
    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        owner_of(&self.inner.read().pool, normalize(full_name)).is_some()
    }

    /// Returns a snapshot of the underlying descriptor pool.
    #[must_use]
    pub fn pool(&self) -> DescriptorPool {
        self.inner.read().pool.clone()
    }

    /// Number of registered files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    /// Returns true if no file is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of registered files in registration order.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }
}

/// Strips the leading dot of a field type reference.
fn normalize(full_name: &str) -> &str {
    full_name.strip_prefix('.').unwrap_or(full_name)
}

/// Name of the file declaring a message or enum.
fn owner_of(pool: &DescriptorPool, type_name: &str) -> Option<String> {
    pool.get_message_by_name(type_name)
        .map(|m| m.parent_file().name().to_string())
        .or_else(|| {
            pool.get_enum_by_name(type_name)
                .map(|e| e.parent_file().name().to_string())
        })
}

fn validate(pool: &DescriptorPool, file: &FileDescriptorProto) -> Result<(), SchemaRegistrationError> {
    for dependency in &file.dependency {
        if pool.get_file_by_name(dependency).is_none() {
            return Err(SchemaRegistrationError::MissingDependency {
                file: file.name().to_string(),
                dependency: dependency.clone(),
            });
        }
    }

    let mut messages = Vec::new();
    let mut enums = Vec::new();
    collect_types(
        file.package(),
        &file.message_type,
        &file.enum_type,
        &mut messages,
        &mut enums,
    );

    let local_names = messages.iter().map(|(name, _)| name).chain(&enums);
    for name in local_names {
        if let Some(existing) = owner_of(pool, name) {
            return Err(SchemaRegistrationError::DuplicateType {
                name: name.clone(),
                file: file.name().to_string(),
                existing,
            });
        }
    }

    for (message_name, message) in &messages {
        for field in &message.field {
            let is_enum = match field.r#type() {
                Type::Enum => true,
                Type::Message | Type::Group => false,
                _ => continue,
            };
            let type_name = normalize(field.type_name());
            let local = if is_enum {
                enums.iter().any(|e| e == type_name)
            } else {
                messages.iter().any(|(name, _)| name == type_name)
            };
            let imported = owner_of(pool, type_name)
                .is_some_and(|owner| file.dependency.contains(&owner));
            if type_name.is_empty() || (!local && !imported) {
                return Err(SchemaRegistrationError::UnresolvedType {
                    message: message_name.clone(),
                    field: field.name().to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Collects fully-qualified names of all messages and enums under `scope`.
fn collect_types<'a>(
    scope: &str,
    messages: &'a [DescriptorProto],
    enums: &[EnumDescriptorProto],
    out_messages: &mut Vec<(String, &'a DescriptorProto)>,
    out_enums: &mut Vec<String>,
) {
    for e in enums {
        out_enums.push(qualify(scope, e.name()));
    }
    for message in messages {
        let full_name = qualify(scope, message.name());
        collect_types(
            &full_name,
            &message.nested_type,
            &message.enum_type,
            out_messages,
            out_enums,
        );
        out_messages.push((full_name, message));
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
