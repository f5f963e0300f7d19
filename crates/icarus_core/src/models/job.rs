//! Job records and the inputs used to create or edit them.

use serde::{Deserialize, Serialize};

use super::enums::Priority;
use super::money::Money;
use super::text::{sentence_case, title_case};

/// A drone brought in for service.
///
/// Text fields are always stored normalized (title case for the client,
/// sentence case for the problem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Service tag, unique across both lanes and the finished list.
    pub tag: u32,
    /// Client name in title case.
    pub client_name: String,
    /// Drone model, trimmed.
    pub drone_model: String,
    /// Problem description in sentence case.
    pub problem_description: String,
    /// Final cost, surcharge included.
    pub cost: Money,
    /// Lane the job was submitted to.
    pub priority: Priority,
}

impl Job {
    /// Build a job, normalizing the text fields.
    pub(crate) fn new(
        tag: u32,
        priority: Priority,
        cost: Money,
        client_name: &str,
        drone_model: &str,
        problem_description: &str,
    ) -> Self {
        let mut job = Self {
            tag,
            client_name: String::new(),
            drone_model: String::new(),
            problem_description: String::new(),
            cost,
            priority,
        };
        job.set_details(client_name, drone_model, problem_description);
        job
    }

    /// Overwrite the editable text fields with normalization.
    pub(crate) fn set_details(
        &mut self,
        client_name: &str,
        drone_model: &str,
        problem_description: &str,
    ) {
        self.client_name = title_case(client_name);
        self.drone_model = drone_model.trim().to_string();
        self.problem_description = sentence_case(problem_description);
    }

    /// One-line summary, e.g. `#100 [Express] Acme Corp – $115.00`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [{}] {} – ${}",
            self.tag, self.priority, self.client_name, self.cost
        )
    }
}

/// Form values for a new job.
///
/// `cost` is the raw text entered by the operator; it is validated and the
/// express surcharge applied on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub tag: u32,
    pub priority: Priority,
    pub client_name: String,
    pub drone_model: String,
    pub problem_description: String,
    pub cost: String,
}

impl JobDraft {
    /// Start a draft for the given tag and lane.
    pub fn new(tag: u32, priority: Priority) -> Self {
        Self {
            tag,
            priority,
            ..Self::default()
        }
    }

    pub fn client_name(mut self, value: impl Into<String>) -> Self {
        self.client_name = value.into();
        self
    }

    pub fn drone_model(mut self, value: impl Into<String>) -> Self {
        self.drone_model = value.into();
        self
    }

    pub fn problem(mut self, value: impl Into<String>) -> Self {
        self.problem_description = value.into();
        self
    }

    pub fn cost(mut self, value: impl Into<String>) -> Self {
        self.cost = value.into();
        self
    }
}

/// Replacement values for a queued job.
///
/// `cost` is only honoured when the queue allows cost edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEdit {
    pub client_name: String,
    pub drone_model: String,
    pub problem_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

impl JobEdit {
    /// Edit the text fields only.
    pub fn new(
        client_name: impl Into<String>,
        drone_model: impl Into<String>,
        problem_description: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            drone_model: drone_model.into(),
            problem_description: problem_description.into(),
            cost: None,
        }
    }

    /// Also request a new cost.
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }
}

/// Read-only copy of the engine state, in queue order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub regular: Vec<Job>,
    pub express: Vec<Job>,
    pub finished: Vec<Job>,
}

impl Snapshot {
    /// Jobs queued in the given lane.
    pub fn lane(&self, priority: Priority) -> &[Job] {
        match priority {
            Priority::Regular => &self.regular,
            Priority::Express => &self.express,
        }
    }

    /// Number of jobs across all three lists.
    pub fn total(&self) -> usize {
        self.regular.len() + self.express.len() + self.finished.len()
    }
}
