use uuid::Uuid;

/// Request-scoped parameter bundle passed explicitly to every
/// persistence call. Never ambient: callers construct one and thread it
/// through.
#[derive(Debug, Clone)]
pub struct Context {
    /// Tenant whose records are visible to this invocation.
    pub tenant_id: Uuid,
    /// BCP 47 locale tag, carried for collaborators that localize.
    pub locale: String,
}

impl Context {
    pub fn new(tenant_id: Uuid, locale: impl Into<String>) -> Self {
        Self {
            tenant_id,
            locale: locale.into(),
        }
    }

    /// The single-tenant default scope (nil tenant, `en-US`).
    pub fn default_context() -> Self {
        Self::new(Uuid::nil(), "en-US")
    }
}
