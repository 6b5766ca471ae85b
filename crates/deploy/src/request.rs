//! Deploy request parameters and stack identity derivation.

use skylift_cloud::Credentials;
use skylift_project::to_logical_id;

/// Caller-supplied parameters for one static deploy.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployRequest {
    /// Target bucket; when absent it is discovered from the stack resources.
    pub bucket: Option<String>,
    pub credentials: Option<Credentials>,
    pub dry_run: bool,
    /// Guards duplicate static-manifest operations downstream; defaults to
    /// true and is forwarded to the publisher untouched.
    pub full_deploy: bool,
    /// Deployment name, appended to the derived stack identity.
    pub name: Option<String>,
    pub production: bool,
    pub region: String,
    /// Explicit stack name; overrides derivation entirely.
    pub stack_name: Option<String>,
    pub verbose: bool,
    /// Publish-path prefix override; wins over the project default.
    pub prefix: Option<String>,
    pub prune: bool,
}

impl DeployRequest {
    /// Creates a request for the given region with default flags.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            bucket: None,
            credentials: None,
            dry_run: false,
            full_deploy: true,
            name: None,
            production: false,
            region: region.into(),
            stack_name: None,
            verbose: false,
            prefix: None,
            prune: false,
        }
    }

    /// Returns the explicit stack name or derives one for the application.
    pub fn resolve_stack_name(&self, app: &str) -> String {
        match &self.stack_name {
            Some(stack) => stack.clone(),
            None => derive_stack_name(app, self.production, self.name.as_deref()),
        }
    }
}

/// Derives the stack identity for an application environment.
///
/// Pure and deterministic: `to_logical_id(app)` plus an environment suffix,
/// plus the normalized deployment name when one was given.
pub fn derive_stack_name(app: &str, production: bool, name: Option<&str>) -> String {
    let mut stack = to_logical_id(app);
    stack.push_str(if production { "Production" } else { "Staging" });
    if let Some(name) = name {
        stack.push_str(&to_logical_id(name));
    }
    stack
}
