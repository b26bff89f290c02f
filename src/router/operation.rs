use std::fmt;

/// The closed set of operations the router understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Acknowledge start-up, optionally seeding demo records.
    Init,
    /// Current record for one id.
    Query,
    /// Upsert a record.
    Record,
    /// Full commit history for one id.
    History,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Init,
        Operation::Query,
        Operation::Record,
        Operation::History,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Query => "query",
            Operation::Record => "record",
            Operation::History => "history",
        }
    }

    /// Name used by earlier deployments of the contract.
    pub fn legacy_name(self) -> &'static str {
        match self {
            Operation::Init => "initLedger",
            Operation::Query => "queryPig",
            Operation::Record => "recordPig",
            Operation::History => "queryPigHistory",
        }
    }

    /// Exact number of string arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Init => 0,
            Operation::Query => 1,
            Operation::Record => 4,
            Operation::History => 1,
        }
    }

    pub fn resolve(name: &str, accept_legacy: bool) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name || (accept_legacy && op.legacy_name() == name))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
