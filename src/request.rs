//! The request description consumed by the URI builders.

use std::fmt;

use crate::assoc_key::AssocKey;
use crate::error::PathError;
use crate::key::ResourceKey;
use crate::query::{ParamValue, QueryParams};
use crate::resource_path::ResourcePath;
use crate::value::Scalar;

/// The kind of a request, which fixes the shape of its URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceMethod {
    /// Fetch one entity by id
    Get,
    /// Fetch several entities by id
    BatchGet,
    /// Fetch a whole collection or association partition
    GetAll,
    /// Run a named collection query
    Finder,
    /// Create one entity
    Create,
    /// Create several entities
    BatchCreate,
    /// Replace one entity
    Update,
    /// Patch one entity
    PartialUpdate,
    /// Replace several entities
    BatchUpdate,
    /// Patch several entities
    BatchPartialUpdate,
    /// Delete one entity
    Delete,
    /// Delete several entities
    BatchDelete,
    /// Invoke a named action
    Action,
}

impl ResourceMethod {
    /// Every request kind.
    pub const ALL: [Self; 13] = [
        Self::Get,
        Self::BatchGet,
        Self::GetAll,
        Self::Finder,
        Self::Create,
        Self::BatchCreate,
        Self::Update,
        Self::PartialUpdate,
        Self::BatchUpdate,
        Self::BatchPartialUpdate,
        Self::Delete,
        Self::BatchDelete,
        Self::Action,
    ];

    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::BatchGet => "batch_get",
            Self::GetAll => "get_all",
            Self::Finder => "finder",
            Self::Create => "create",
            Self::BatchCreate => "batch_create",
            Self::Update => "update",
            Self::PartialUpdate => "partial_update",
            Self::BatchUpdate => "batch_update",
            Self::BatchPartialUpdate => "batch_partial_update",
            Self::Delete => "delete",
            Self::BatchDelete => "batch_delete",
            Self::Action => "action",
        }
    }

    /// Returns true for kinds that address a set of ids.
    #[must_use]
    pub const fn is_batch(self) -> bool {
        matches!(
            self,
            Self::BatchGet | Self::BatchUpdate | Self::BatchPartialUpdate | Self::BatchDelete
        )
    }
}

impl fmt::Display for ResourceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The static description of a resource: its path template and the declared
/// order of its association key fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    path: ResourcePath,
    assoc_key_fields: Vec<String>,
}

impl ResourceSpec {
    /// Creates a resource description without association key fields.
    #[must_use]
    pub const fn new(path: ResourcePath) -> Self {
        Self {
            path,
            assoc_key_fields: Vec::new(),
        }
    }

    /// Parses the path template and creates a resource description.
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidTemplate` if the template is invalid.
    pub fn parse(template: &str) -> Result<Self, PathError> {
        ResourcePath::parse(template).map(Self::new)
    }

    /// Returns the description with the declared association key fields.
    #[must_use]
    pub fn with_assoc_key_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assoc_key_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the path template.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Returns the declared association key fields in order.
    #[must_use]
    pub fn assoc_key_fields(&self) -> &[String] {
        &self.assoc_key_fields
    }

    /// Returns an empty association key with the declared field order.
    #[must_use]
    pub fn assoc_key(&self) -> AssocKey {
        AssocKey::new(self.assoc_key_fields.iter().cloned())
    }
}

/// Paging window of a collection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paging {
    /// Offset of the first element
    pub start: u32,
    /// Page size
    pub count: u32,
}

impl Paging {
    /// Creates a paging window.
    #[must_use]
    pub const fn new(start: u32, count: u32) -> Self {
        Self { start, count }
    }
}

/// A typed request whose URI is to be built.
///
/// # Examples
///
/// ```
/// use restli_uri::{Request, ResourceMethod, ResourceSpec};
///
/// let widgets = ResourceSpec::parse("/widgets").unwrap();
/// let request = Request::get(widgets, 42).with_fields(["name"]);
/// assert_eq!(request.method(), ResourceMethod::Get);
/// assert!(request.id().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: ResourceMethod,
    resource: ResourceSpec,
    path_keys: Vec<ResourceKey>,
    id: Option<ResourceKey>,
    ids: Vec<ResourceKey>,
    assoc_key: AssocKey,
    finder: Option<String>,
    action: Option<String>,
    fields: Vec<String>,
    paging: Option<Paging>,
    params: QueryParams,
}

impl Request {
    /// Creates a request of the given kind with no inputs set.
    #[must_use]
    pub fn new(method: ResourceMethod, resource: ResourceSpec) -> Self {
        let assoc_key = resource.assoc_key();
        Self {
            method,
            resource,
            path_keys: Vec::new(),
            id: None,
            ids: Vec::new(),
            assoc_key,
            finder: None,
            action: None,
            fields: Vec::new(),
            paging: None,
            params: QueryParams::new(),
        }
    }

    /// Creates a GET request for one id.
    #[must_use]
    pub fn get(resource: ResourceSpec, id: impl Into<ResourceKey>) -> Self {
        Self::new(ResourceMethod::Get, resource).with_id(id)
    }

    /// Creates a BATCH_GET request for a set of ids.
    #[must_use]
    pub fn batch_get<I, K>(resource: ResourceSpec, ids: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        Self::new(ResourceMethod::BatchGet, resource).with_ids(ids)
    }

    /// Creates a GET_ALL request.
    #[must_use]
    pub fn get_all(resource: ResourceSpec) -> Self {
        Self::new(ResourceMethod::GetAll, resource)
    }

    /// Creates a FINDER request for the named finder.
    #[must_use]
    pub fn finder(resource: ResourceSpec, name: impl Into<String>) -> Self {
        let mut request = Self::new(ResourceMethod::Finder, resource);
        request.finder = Some(name.into());
        request
    }

    /// Creates an ACTION request for the named action.
    #[must_use]
    pub fn action(resource: ResourceSpec, name: impl Into<String>) -> Self {
        let mut request = Self::new(ResourceMethod::Action, resource);
        request.action = Some(name.into());
        request
    }

    /// Creates a CREATE request.
    #[must_use]
    pub fn create(resource: ResourceSpec) -> Self {
        Self::new(ResourceMethod::Create, resource)
    }

    /// Creates an UPDATE request for one id.
    #[must_use]
    pub fn update(resource: ResourceSpec, id: impl Into<ResourceKey>) -> Self {
        Self::new(ResourceMethod::Update, resource).with_id(id)
    }

    /// Creates a DELETE request for one id.
    #[must_use]
    pub fn delete(resource: ResourceSpec, id: impl Into<ResourceKey>) -> Self {
        Self::new(ResourceMethod::Delete, resource).with_id(id)
    }

    /// Returns the request with the given path keys, in template order.
    #[must_use]
    pub fn with_path_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        self.path_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the request addressing one id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ResourceKey>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the request addressing a set of ids, kept in the given order.
    #[must_use]
    pub fn with_ids<I, K>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the request with the whole association key replaced.
    ///
    /// The key's values are kept; its field order is replaced by the order
    /// the resource declares.
    #[must_use]
    pub fn with_assoc_key(mut self, key: AssocKey) -> Self {
        self.assoc_key = key.with_declared(self.resource.assoc_key_fields().iter().cloned());
        self
    }

    /// Returns the request with one association key field set.
    #[must_use]
    pub fn with_assoc_key_value(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.assoc_key.set(name, value);
        self
    }

    /// Returns the request with a custom or finder parameter set.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Returns the request with every parameter of `params` set.
    #[must_use]
    pub fn with_params(mut self, params: &QueryParams) -> Self {
        self.params.extend(params);
        self
    }

    /// Returns the request with the given projection fields.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the request with a paging window.
    #[must_use]
    pub const fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = Some(paging);
        self
    }

    /// Returns the request kind.
    #[must_use]
    pub const fn method(&self) -> ResourceMethod {
        self.method
    }

    /// Returns the resource description.
    #[must_use]
    pub const fn resource(&self) -> &ResourceSpec {
        &self.resource
    }

    /// Returns the path keys.
    #[must_use]
    pub fn path_keys(&self) -> &[ResourceKey] {
        &self.path_keys
    }

    /// Returns the id, if one is set.
    #[must_use]
    pub const fn id(&self) -> Option<&ResourceKey> {
        self.id.as_ref()
    }

    /// Returns the batch ids in caller order.
    #[must_use]
    pub fn ids(&self) -> &[ResourceKey] {
        &self.ids
    }

    /// Returns the association key.
    #[must_use]
    pub const fn assoc_key(&self) -> &AssocKey {
        &self.assoc_key
    }

    /// Returns the finder name, if set.
    #[must_use]
    pub fn finder_name(&self) -> Option<&str> {
        self.finder.as_deref()
    }

    /// Returns the action name, if set.
    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the projection fields.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the paging window, if set.
    #[must_use]
    pub const fn paging(&self) -> Option<Paging> {
        self.paging
    }

    /// Returns the custom or finder parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }
}
