#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    InsertSearch,
    InsertRemove,
    InsertOnly,
    Unknown,
}

impl OperationKind {
    // `insert_search` must be checked before the plain `insert` substring.
    pub fn from_name(name: &str) -> Self {
        if name.contains("insert_search") {
            OperationKind::InsertSearch
        } else if name.contains("full_cycle") {
            OperationKind::InsertRemove
        } else if name.contains("insert") {
            OperationKind::InsertOnly
        } else {
            OperationKind::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::InsertSearch => "Insert + Search",
            OperationKind::InsertRemove => "Insert + Remove",
            OperationKind::InsertOnly => "Insert Only",
            OperationKind::Unknown => "Unknown",
        }
    }

    pub fn phases(&self) -> u64 {
        match self {
            OperationKind::InsertSearch | OperationKind::InsertRemove => 2,
            OperationKind::InsertOnly | OperationKind::Unknown => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedBench {
    pub kind: OperationKind,
    pub element_count: u64,
    pub operation_count: u64,
}

impl ClassifiedBench {
    pub fn chart_name(&self) -> String {
        format!("{} ({} elements)", self.kind.label(), self.element_count)
    }
}

pub fn classify(name: &str) -> Option<ClassifiedBench> {
    let element_count = trailing_count(name)?;
    let kind = OperationKind::from_name(name);
    let operation_count = element_count.saturating_mul(kind.phases());
    Some(ClassifiedBench {
        kind,
        element_count,
        operation_count,
    })
}

// Benchmark names encode their problem size as `_<digits>` at the end;
// anything without that suffix carries no size and is skipped.
fn trailing_count(name: &str) -> Option<u64> {
    let digits = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let split = name.len() - digits;
    if !name[..split].ends_with('_') {
        return None;
    }
    name[split..].parse().ok()
}
