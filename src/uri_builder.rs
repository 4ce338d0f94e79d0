//! Shared state and helper steps of the per-kind URI builders.

use tracing::{debug, trace};

use crate::builders::builder_for;
use crate::constants::{
    BATCH_IDS_PARAM, COUNT_PARAM, FIELDS_PARAM, QUERY_TYPE_PARAM, RESERVED_PARAMS, START_PARAM,
};
use crate::error::{BuildError, BuildErrorKind, EncodingError};
use crate::escape::escape;
use crate::key_codec::KeyCodec;
use crate::path_assembler::PathAssembler;
use crate::query::ParamValue;
use crate::query_codec::QueryParamCodec;
use crate::request::Request;
use crate::ruleset::Ruleset;
use crate::uri::RequestUri;
use crate::value::Scalar;
use crate::version::ProtocolVersion;

/// Builds the URI of one request under one protocol version.
///
/// A builder is created for a single request, runs the step sequence of the
/// request's kind, and is consumed by [`RequestUriBuilder::build`]. The steps
/// are public so custom kinds can be composed from the same pieces.
///
/// # Examples
///
/// ```
/// use restli_uri::{ProtocolVersion, Request, RequestUriBuilder, ResourceSpec};
///
/// let widgets = ResourceSpec::parse("/widgets").unwrap();
/// let request = Request::batch_get(widgets, [1, 2, 3]);
///
/// let uri = RequestUriBuilder::new(&request, "", ProtocolVersion::CURRENT)
///     .build()
///     .unwrap();
/// assert_eq!(uri.as_str(), "widgets?ids=1,2,3");
///
/// let uri = RequestUriBuilder::new(&request, "", ProtocolVersion::LEGACY)
///     .build()
///     .unwrap();
/// assert_eq!(uri.as_str(), "widgets?ids[]=1&ids[]=2&ids[]=3");
/// ```
#[derive(Debug)]
pub struct RequestUriBuilder<'a> {
    request: &'a Request,
    prefix: &'a str,
    version: ProtocolVersion,
    rules: &'static Ruleset,
    path: String,
    query: Vec<(String, String)>,
}

impl<'a> RequestUriBuilder<'a> {
    /// Creates a builder for a request.
    #[must_use]
    pub fn new(request: &'a Request, prefix: &'a str, version: ProtocolVersion) -> Self {
        Self {
            request,
            prefix,
            version,
            rules: version.ruleset(),
            path: String::new(),
            query: Vec::new(),
        }
    }

    /// Returns the request being built.
    #[must_use]
    pub const fn request(&self) -> &'a Request {
        self.request
    }

    /// Returns the URI prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Returns the target protocol version.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Returns the ruleset every step encodes with.
    #[must_use]
    pub const fn rules(&self) -> &'static Ruleset {
        self.rules
    }

    /// Returns the path assembled so far.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query entries collected so far.
    #[must_use]
    pub fn query_entries(&self) -> &[(String, String)] {
        &self.query
    }

    /// Runs the step sequence registered for the request's kind.
    ///
    /// # Errors
    ///
    /// Returns `BuildError` if no builder is registered for the kind, the
    /// request lacks a component its kind requires, or any key, parameter,
    /// or path cannot be encoded. No partial URI is produced.
    pub fn build(mut self) -> Result<RequestUri, BuildError> {
        let method = self.request.method();
        debug!(%method, version = %self.version, prefix = self.prefix, "building request URI");

        builder_for(method)
            .map_err(BuildErrorKind::from)
            .and_then(|kind| kind.run(&mut self))
            .map_err(|kind| BuildError { method, kind })?;

        let uri = self.finish();
        debug!(%method, len = uri.as_str().len(), "built request URI");
        Ok(uri)
    }

    /// Consumes the builder, joining the path and query built so far.
    #[must_use]
    pub fn finish(self) -> RequestUri {
        RequestUri::new(
            self.path,
            &QueryParamCodec::to_query_string(&self.query),
            self.version,
        )
    }

    /// Replaces the path with the prefixed base path of the resource.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::Path` if the path keys do not fit the template.
    pub fn build_base_uri_with_prefix(&mut self) -> Result<(), BuildErrorKind> {
        self.path = PathAssembler::new(self.rules).build_base_path(
            self.request.resource().path(),
            self.request.path_keys(),
            self.prefix,
        )?;
        Ok(())
    }

    /// Appends one already-encoded segment to the path.
    pub fn append_path_segment(&mut self, segment: &str) {
        self.path.push('/');
        self.path.push_str(segment);
    }

    /// Appends the encoded id as a path segment, if the request has one.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::Encoding` if the id cannot be encoded.
    pub fn append_id(&mut self) -> Result<(), BuildErrorKind> {
        if let Some(id) = self.request.id() {
            let encoded = KeyCodec::new(self.rules).encode(id)?;
            trace!(id = %encoded, "appending id");
            self.append_path_segment(&encoded);
        }
        Ok(())
    }

    /// Appends the action name as a path segment.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::MissingComponent` if no action name is set.
    pub fn append_action(&mut self) -> Result<(), BuildErrorKind> {
        let name = self
            .request
            .action_name()
            .ok_or(BuildErrorKind::MissingComponent {
                component: "action name",
            })?;
        let segment = escape(name, self.rules.value_set);
        self.append_path_segment(&segment);
        Ok(())
    }

    /// Appends the association key as a path segment.
    ///
    /// An empty association key leaves the path unchanged.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::Encoding` if a value is set for an undeclared
    /// field or cannot be encoded.
    pub fn append_assoc_keys(&mut self) -> Result<(), BuildErrorKind> {
        let encoded = KeyCodec::new(self.rules).encode_assoc_key(self.request.assoc_key())?;
        if encoded.is_empty() {
            trace!("association key empty, path unchanged");
            return Ok(());
        }
        self.append_path_segment(&encoded);
        Ok(())
    }

    /// Appends the request's custom parameters in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::Encoding` if a parameter uses a name the
    /// builders emit themselves or cannot be encoded.
    pub fn append_query_params(&mut self) -> Result<(), BuildErrorKind> {
        let params = self.request.params();
        if let Some(name) = params
            .iter()
            .map(|(name, _)| name)
            .find(|name| RESERVED_PARAMS.contains(name))
        {
            return Err(EncodingError::ReservedName {
                name: name.to_string(),
            }
            .into());
        }
        let entries = QueryParamCodec::new(self.rules).encode_params(params)?;
        trace!(count = entries.len(), "appending query params");
        self.query.extend(entries);
        Ok(())
    }

    /// Appends the batch ids in caller order.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::MissingComponent` if the request has no ids,
    /// or `BuildErrorKind::Encoding` if an id cannot be encoded.
    pub fn append_batch_ids(&mut self) -> Result<(), BuildErrorKind> {
        let ids = self.request.ids();
        if ids.is_empty() {
            return Err(BuildErrorKind::MissingComponent { component: "ids" });
        }
        QueryParamCodec::new(self.rules).encode_param(
            BATCH_IDS_PARAM,
            &ParamValue::Keys(ids.to_vec()),
            &mut self.query,
        )?;
        Ok(())
    }

    /// Appends the finder name followed by the finder parameters.
    ///
    /// # Errors
    ///
    /// Returns `BuildErrorKind::MissingComponent` if no finder name is set,
    /// or any error of [`RequestUriBuilder::append_query_params`].
    pub fn append_finder(&mut self) -> Result<(), BuildErrorKind> {
        let name = self
            .request
            .finder_name()
            .ok_or(BuildErrorKind::MissingComponent {
                component: "finder name",
            })?;
        let encoded = KeyCodec::new(self.rules).encode_scalar(&Scalar::from(name))?;
        self.query.push((QUERY_TYPE_PARAM.to_string(), encoded));
        self.append_query_params()
    }

    /// Appends the paging window, if the request has one.
    pub fn append_paging(&mut self) {
        if let Some(paging) = self.request.paging() {
            self.query.push((START_PARAM.to_string(), paging.start.to_string()));
            self.query.push((COUNT_PARAM.to_string(), paging.count.to_string()));
        }
    }

    /// Appends the projection as a list-valued `fields` parameter.
    ///
    /// The layout follows the ruleset's list style: `fields=a,b` or
    /// `fields[]=a&fields[]=b`.
    pub fn append_projection(&mut self) {
        let fields = self
            .request
            .fields()
            .iter()
            .map(|field| escape(field, self.rules.value_set))
            .collect();
        QueryParamCodec::new(self.rules).push_list(FIELDS_PARAM, fields, &mut self.query);
    }
}
