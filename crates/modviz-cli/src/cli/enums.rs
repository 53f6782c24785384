use clap::ValueEnum;
use modviz_graph::PathVisitPolicy;

/// Output format of the `project` command.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum ProjectFormat {
    /// Nodes and edges as pretty-printed JSON
    #[default]
    #[value(name = "json")]
    Json,

    /// Graphviz DOT, e.g. for `dot -Tsvg`
    #[value(name = "dot")]
    Dot,
}

/// Whether a module may be revisited by another branch during path search.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum PolicyArg {
    /// Report every simple path
    #[default]
    #[value(name = "per-path")]
    PerPath,

    /// Enter each module at most once per search
    #[value(name = "shared")]
    Shared,
}

impl From<PolicyArg> for PathVisitPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::PerPath => PathVisitPolicy::PerPath,
            PolicyArg::Shared => PathVisitPolicy::Shared,
        }
    }
}
