//! Constants shared by the request URI builders.

/// Query parameter carrying the finder name.
pub const QUERY_TYPE_PARAM: &str = "q";

/// Query parameter carrying a batch key set.
pub const BATCH_IDS_PARAM: &str = "ids";

/// Query parameter carrying the field projection.
pub const FIELDS_PARAM: &str = "fields";

/// Query parameter carrying the paging start offset.
pub const START_PARAM: &str = "start";

/// Query parameter carrying the paging page size.
pub const COUNT_PARAM: &str = "count";

/// Reserved field name holding the params part of a complex resource key.
pub const COMPLEX_KEY_PARAMS: &str = "$params";

/// Header the transport uses to announce the protocol version of a request.
pub const PROTOCOL_VERSION_HEADER: &str = "X-RestLi-Protocol-Version";

/// Maximum nesting depth of a structured query parameter value.
pub const MAX_QUERY_PARAM_DEPTH: usize = 1;

/// Query parameter names the builders emit themselves.
pub const RESERVED_PARAMS: [&str; 5] = [
    QUERY_TYPE_PARAM,
    BATCH_IDS_PARAM,
    FIELDS_PARAM,
    START_PARAM,
    COUNT_PARAM,
];
