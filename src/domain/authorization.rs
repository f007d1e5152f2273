use std::collections::HashMap;

/// Named authorization rules checked before a request reaches a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    ViewCustomers,
    Dashboard,
    CompanyCar,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::ViewCustomers => "ViewCustomers",
            Policy::Dashboard => "Dashboard",
            Policy::CompanyCar => "CompanyCar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Role(String),
    Claim(String),
}

/// The authenticated caller as asserted by the identity layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    pub user: String,
    pub roles: Vec<String>,
    pub claims: Vec<String>,
}

impl Principal {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_claim(&self, claim: &str) -> bool {
        self.claims.iter().any(|c| c == claim)
    }

    fn satisfies(&self, requirement: &Requirement) -> bool {
        match requirement {
            Requirement::Role(role) => self.has_role(role),
            Requirement::Claim(claim) => self.has_claim(claim),
        }
    }
}

pub trait Authorizer: Send + Sync + 'static {
    fn authorize(&self, principal: &Principal, policy: Policy) -> bool;
}

/// Evaluates policies from a table of requirements. Every requirement of a
/// policy must hold; a policy missing from the table is denied.
#[derive(Debug, Clone, Default)]
pub struct PolicyAuthorizer {
    policies: HashMap<Policy, Vec<Requirement>>,
}

impl PolicyAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: Policy, requirement: Requirement) -> Self {
        self.policies.entry(policy).or_default().push(requirement);
        self
    }
}

impl Authorizer for PolicyAuthorizer {
    fn authorize(&self, principal: &Principal, policy: Policy) -> bool {
        match self.policies.get(&policy) {
            Some(requirements) => requirements.iter().all(|r| principal.satisfies(r)),
            None => false,
        }
    }
}

/// The policy table the application ships with.
pub fn default_authorizer() -> PolicyAuthorizer {
    PolicyAuthorizer::new()
        .with_policy(Policy::ViewCustomers, Requirement::Role("Admin".to_string()))
        .with_policy(Policy::Dashboard, Requirement::Role("Admin".to_string()))
        .with_policy(
            Policy::CompanyCar,
            Requirement::Claim("AutoAziendale".to_string()),
        )
}
