//! Request script builders for end-to-end tests

use ragraph_lib::application::Request;

/// An ordered list of requests that renders to a JSON-lines script
#[derive(Debug, Clone, Default)]
pub struct Script {
    requests: Vec<Request>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }

    pub fn add_process(self, id: &str) -> Self {
        self.push(Request::AddProcess { id: id.to_string() })
    }

    pub fn add_resource(self, id: &str) -> Self {
        self.push(Request::AddResource { id: id.to_string() })
    }

    pub fn request(self, process: &str, resource: &str) -> Self {
        self.push(Request::RequestResource {
            process: process.to_string(),
            resource: resource.to_string(),
        })
    }

    pub fn allocate(self, process: &str, resource: &str) -> Self {
        self.push(Request::AllocateResource {
            process: process.to_string(),
            resource: resource.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Render one JSON request per line
    pub fn render(&self) -> String {
        self.requests
            .iter()
            .map(|request| serde_json::to_string(request).expect("requests always serialize"))
            .map(|line| line + "\n")
            .collect()
    }
}

/// P1 -> R1 -> P2 -> R2 -> P1
pub fn classic_deadlock_script() -> Script {
    Script::new()
        .add_process("P1")
        .add_process("P2")
        .add_resource("R1")
        .add_resource("R2")
        .request("P1", "R1")
        .allocate("P2", "R1")
        .request("P2", "R2")
        .allocate("P1", "R2")
}
