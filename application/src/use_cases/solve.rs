//! Solve use case
//!
//! Orchestrates the full plan → execute → verify loop with bounded
//! retries. Transport faults never escape this module: the gateway
//! wrapper degrades every failure to a sentinel text, and each stage
//! downgrades unparseable model output to a well-typed fallback record,
//! so the controller's flow is uniform whether the model answered,
//! refused or rambled.

use crate::ports::llm_gateway::{CompletionGateway, CompletionRequest};
use crate::ports::progress::{NoProgress, SolveProgress};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use verisolve_domain::solve::solution::truncate_chars;
use verisolve_domain::{
    AgentResponse, Check, CheckReport, Phase, Question, Solution, SolvePromptTemplate,
    extract_array, extract_object,
};

/// Default number of retries beyond the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Fixed wait before the single inline retry after a rate limit
const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(2);

/// Sentinel returned when the prompt was rejected by safety filters
const BLOCKED_SENTINEL: &str = "Error: Content was blocked by safety filters.";

/// Sentinel returned when the inline rate-limit retry also failed
const RATE_LIMIT_SENTINEL: &str =
    "Error: Rate limit exceeded. Please wait a moment and try again.";

/// Input for the Solve use case
#[derive(Debug, Clone)]
pub struct SolveInput {
    /// The question to solve
    pub question: Question,
    /// Retries beyond the first attempt (so `max_retries + 1` attempts total)
    pub max_retries: u32,
}

impl SolveInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Use case for solving one question with self-checking
pub struct SolveUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: CompletionGateway + 'static> SolveUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: SolveInput) -> AgentResponse {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Runs up to `max_retries + 1` plan → execute → verify attempts and
    /// stops at the first attempt whose check set is non-empty and fully
    /// passing. Failed attempts are retried from scratch; no feedback
    /// from failed checks is injected into the next attempt's prompts.
    pub async fn execute_with_progress(
        &self,
        input: SolveInput,
        progress: &dyn SolveProgress,
    ) -> AgentResponse {
        let max_attempts = input.max_retries + 1;
        let question = &input.question;
        let mut all_checks: Vec<Check> = Vec::new();
        let mut last_plan = String::new();

        info!("Solving question ({} max attempts)", max_attempts);

        for attempt in 0..max_attempts {
            progress.on_attempt_start(attempt, max_attempts);
            info!("Attempt {}/{}", attempt + 1, max_attempts);

            // Phase 1: Plan
            progress.on_phase_start(Phase::Plan);
            let plan = self.plan(question).await;
            progress.on_phase_complete(Phase::Plan);

            // Phase 2: Execute
            progress.on_phase_start(Phase::Execute);
            let solution = self.execute_plan(question, &plan).await;
            progress.on_phase_complete(Phase::Execute);

            // Phase 3: Verify
            progress.on_phase_start(Phase::Verify);
            let checks = self.verify(question, &solution).await;
            progress.on_phase_complete(Phase::Verify);

            all_checks.extend(checks.iter().cloned());

            let report = CheckReport::new(checks);
            let passed = report.all_passed();
            progress.on_attempt_complete(attempt, &report.checks, passed);

            if passed {
                info!(
                    "Verification passed on attempt {} ({} checks)",
                    attempt + 1,
                    report.checks.len()
                );
                return AgentResponse::success(&solution, plan, report.checks, attempt);
            }

            warn!(
                "Attempt {} failed verification ({} of {} checks failing)",
                attempt + 1,
                report.fail_count(),
                report.checks.len()
            );
            last_plan = plan;
        }

        info!("All {} attempts exhausted", max_attempts);
        AgentResponse::failed(last_plan, all_checks, input.max_retries)
    }

    /// Phase 1: produce a step-by-step plan (opaque text, never parsed)
    async fn plan(&self, question: &Question) -> String {
        self.call_llm(
            SolvePromptTemplate::planner_prompt(question.content()),
            SolvePromptTemplate::planner_system(),
        )
        .await
    }

    /// Phase 2: follow the plan to a structured solution
    ///
    /// Extraction failure is terminal for the attempt: the degraded
    /// solution flows on to verification, where it will fail on its own
    /// merits. The outer retry loop is the only retry mechanism.
    async fn execute_plan(&self, question: &Question, plan: &str) -> Solution {
        let raw = self
            .call_llm(
                SolvePromptTemplate::executor_prompt(question.content(), plan),
                SolvePromptTemplate::executor_system(),
            )
            .await;

        let extracted = extract_object(&raw)
            .map_err(|e| e.to_string())
            .and_then(|value| serde_json::from_value::<Solution>(value).map_err(|e| e.to_string()));

        match extracted {
            Ok(solution) => {
                debug!("Executor produced answer: {}", solution.answer);
                solution
            }
            Err(e) => {
                warn!("Could not parse executor response: {}", e);
                Solution::parse_failure(&raw)
            }
        }
    }

    /// Phase 3: run the named checks against the solution
    ///
    /// Fail-closed: when the verifier's output cannot be parsed into
    /// checks, the attempt gets a single failing "Verification Error"
    /// check quoting the raw response.
    async fn verify(&self, question: &Question, solution: &Solution) -> Vec<Check> {
        let raw = self
            .call_llm(
                SolvePromptTemplate::verifier_prompt(question.content(), solution),
                SolvePromptTemplate::verifier_system(),
            )
            .await;

        let extracted = extract_array(&raw)
            .map_err(|e| e.to_string())
            .and_then(|value| {
                serde_json::from_value::<Vec<Check>>(value).map_err(|e| e.to_string())
            });

        match extracted {
            Ok(checks) => {
                debug!("Verifier returned {} checks", checks.len());
                checks
            }
            Err(e) => {
                warn!(
                    "Could not parse verification response ({}): {}",
                    e,
                    truncate_chars(&raw, 200)
                );
                vec![Check::fail(
                    "Verification Error",
                    format!(
                        "Could not parse verification properly. Raw response: {}",
                        truncate_chars(&raw, 200)
                    ),
                )]
            }
        }
    }

    /// Call the gateway, degrading every failure to a sentinel text.
    ///
    /// Rate limits get one inline retry after a fixed backoff; all other
    /// failures map straight to their marker string. Never returns an
    /// error, so downstream extraction treats the output as
    /// always-present text that may or may not parse.
    async fn call_llm(&self, prompt: String, system: &str) -> String {
        let request = CompletionRequest::new(prompt).with_system(system);

        match self.gateway.complete(request.clone()).await {
            Ok(text) => text,
            Err(e) if e.is_blocked() => {
                warn!("Prompt blocked by safety filters: {}", e);
                BLOCKED_SENTINEL.to_string()
            }
            Err(e) if e.is_rate_limit() => {
                warn!(
                    "Rate limited, retrying once after {}s",
                    RATE_LIMIT_BACKOFF.as_secs()
                );
                tokio::time::sleep(RATE_LIMIT_BACKOFF).await;
                match self.gateway.complete(request).await {
                    Ok(text) => text,
                    Err(retry_err) => {
                        warn!("Inline retry also failed: {}", retry_err);
                        RATE_LIMIT_SENTINEL.to_string()
                    }
                }
            }
            Err(e) => format!("Error calling LLM: {}", e),
        }
    }
}
