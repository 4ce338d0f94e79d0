//! Per-kind step sequences and the table that dispatches on request kind.
//!
//! | kind | steps |
//! |------|-------|
//! | get | base, id, projection, custom params |
//! | `batch_get` | base, ids, projection, custom params |
//! | `get_all` | base, assoc keys, paging, projection, custom params |
//! | finder | base, assoc keys, `q` and finder params, paging, projection |
//! | action | base, optional id, action name segment |
//! | create, `batch_create` | base, projection |
//! | update, `partial_update`, delete | base, optional id, projection |
//! | `batch_update`, `batch_partial_update`, `batch_delete` | base, ids, projection |
//!
//! Adding a kind means adding one row to the table; the shared steps on
//! [`RequestUriBuilder`] stay untouched.

use crate::error::{BuildError, BuildErrorKind, UnsupportedKindError};
use crate::request::{Request, ResourceMethod};
use crate::uri::RequestUri;
use crate::uri_builder::RequestUriBuilder;
use crate::version::ProtocolVersion;

/// A step sequence producing the URI of one request kind.
pub type BuildFn = fn(&mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind>;

/// The step sequence registered for one request kind.
#[derive(Debug, Clone, Copy)]
pub struct KindBuilder {
    method: ResourceMethod,
    build: BuildFn,
}

impl KindBuilder {
    /// Returns the kind this sequence builds.
    #[must_use]
    pub const fn method(&self) -> ResourceMethod {
        self.method
    }

    /// Runs the sequence against a builder.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step.
    pub fn run(&self, builder: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
        (self.build)(builder)
    }
}

static BUILDERS: [KindBuilder; 13] = [
    KindBuilder { method: ResourceMethod::Get, build: build_get },
    KindBuilder { method: ResourceMethod::BatchGet, build: build_batch_get },
    KindBuilder { method: ResourceMethod::GetAll, build: build_get_all },
    KindBuilder { method: ResourceMethod::Finder, build: build_finder },
    KindBuilder { method: ResourceMethod::Create, build: build_create },
    KindBuilder { method: ResourceMethod::BatchCreate, build: build_create },
    KindBuilder { method: ResourceMethod::Update, build: build_single_entity },
    KindBuilder { method: ResourceMethod::PartialUpdate, build: build_single_entity },
    KindBuilder { method: ResourceMethod::BatchUpdate, build: build_batch_entity },
    KindBuilder { method: ResourceMethod::BatchPartialUpdate, build: build_batch_entity },
    KindBuilder { method: ResourceMethod::Delete, build: build_single_entity },
    KindBuilder { method: ResourceMethod::BatchDelete, build: build_batch_entity },
    KindBuilder { method: ResourceMethod::Action, build: build_action },
];

/// Looks up the step sequence for a request kind.
///
/// # Errors
///
/// Returns `UnsupportedKindError` if no sequence is registered for the kind.
///
/// # Examples
///
/// ```
/// use restli_uri::{ResourceMethod, builder_for};
///
/// for method in ResourceMethod::ALL {
///     assert_eq!(builder_for(method).unwrap().method(), method);
/// }
/// ```
pub fn builder_for(method: ResourceMethod) -> Result<KindBuilder, UnsupportedKindError> {
    BUILDERS
        .iter()
        .find(|b| b.method == method)
        .copied()
        .ok_or(UnsupportedKindError { method })
}

/// Builds the URI of a request in one call.
///
/// # Errors
///
/// Returns `BuildError` if the request cannot be encoded; see
/// [`RequestUriBuilder::build`].
///
/// # Examples
///
/// ```
/// use restli_uri::{ProtocolVersion, Request, ResourceSpec, build_uri};
///
/// let spec = ResourceSpec::parse("/widgets").unwrap().with_assoc_key_fields(["color", "size"]);
/// let request = Request::get_all(spec).with_assoc_key_value("color", "red");
/// let uri = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap();
/// assert_eq!(uri.as_str(), "widgets/(color:red)");
/// ```
pub fn build_uri(
    request: &Request,
    prefix: &str,
    version: ProtocolVersion,
) -> Result<RequestUri, BuildError> {
    RequestUriBuilder::new(request, prefix, version).build()
}

fn require(present: bool, component: &'static str) -> Result<(), BuildErrorKind> {
    if present {
        Ok(())
    } else {
        Err(BuildErrorKind::MissingComponent { component })
    }
}

fn build_get(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    require(b.request().id().is_some(), "id")?;
    b.build_base_uri_with_prefix()?;
    b.append_id()?;
    b.append_projection();
    b.append_query_params()
}

fn build_batch_get(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_batch_ids()?;
    b.append_projection();
    b.append_query_params()
}

fn build_get_all(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_assoc_keys()?;
    b.append_paging();
    b.append_projection();
    b.append_query_params()
}

fn build_finder(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_assoc_keys()?;
    b.append_finder()?;
    b.append_paging();
    b.append_projection();
    Ok(())
}

fn build_action(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_id()?;
    b.append_action()
}

fn build_create(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_projection();
    Ok(())
}

fn build_single_entity(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_id()?;
    b.append_projection();
    Ok(())
}

fn build_batch_entity(b: &mut RequestUriBuilder<'_>) -> Result<(), BuildErrorKind> {
    b.build_base_uri_with_prefix()?;
    b.append_batch_ids()?;
    b.append_projection();
    Ok(())
}
