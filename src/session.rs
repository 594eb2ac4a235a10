use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<SessionMeta>,
    pub structure: StructureSpec,
    #[serde(default)]
    pub ops: Vec<OpSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureSpec {
    List,
    Dll,
    Stack {
        #[serde(default)]
        capacity: Option<usize>,
    },
    Queue {
        #[serde(default)]
        capacity: Option<usize>,
    },
    Tree,
    Recursion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpSpec {
    InsertHead { value: String },
    InsertTail { value: String },
    DeleteValue { value: String },
    DeleteHead,
    Push { value: String },
    Pop,
    Peek,
    Enqueue { value: String },
    Dequeue,
    Insert { value: i64 },
    Factorial { n: u64 },
    Reset,
}

impl OpSpec {
    pub fn label(&self) -> &'static str {
        match self {
            OpSpec::InsertHead { .. } => "insert_head",
            OpSpec::InsertTail { .. } => "insert_tail",
            OpSpec::DeleteValue { .. } => "delete_value",
            OpSpec::DeleteHead => "delete_head",
            OpSpec::Push { .. } => "push",
            OpSpec::Pop => "pop",
            OpSpec::Peek => "peek",
            OpSpec::Enqueue { .. } => "enqueue",
            OpSpec::Dequeue => "dequeue",
            OpSpec::Insert { .. } => "insert",
            OpSpec::Factorial { .. } => "factorial",
            OpSpec::Reset => "reset",
        }
    }
}
