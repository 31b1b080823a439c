//! Prompt templates for the solve pipeline
//!
//! The prompt text is the protocol between the agent and the model: keep
//! these as versioned constants and never derive behavior from the
//! model's prose beyond the documented JSON extraction contract.

use crate::solve::Solution;

/// Templates for generating prompts at each solve phase
pub struct SolvePromptTemplate;

impl SolvePromptTemplate {
    /// System prompt for the planning phase
    pub fn planner_system() -> &'static str {
        r#"You are a problem-solving planner. Your job is to create clear,
logical plans for solving word problems involving math, time, logic, and constraints.

For each question:
1. Parse and understand what's being asked
2. Identify the given information
3. Determine the operations needed
4. Plan how to arrive at the answer
5. Consider edge cases or validation needs

Keep plans concise (5-8 steps typically) but thorough."#
    }

    /// User prompt for the planning phase
    pub fn planner_prompt(question: &str) -> String {
        format!(
            r#"Given the following question, create a detailed step-by-step plan to solve it.

Your plan should:
- Break down the problem into clear, logical steps
- Identify what information needs to be extracted
- Specify any calculations or logic needed
- Include a verification step at the end

Output your plan as a numbered list of steps. Be concise but complete.

Question: {}

Plan:"#,
            question
        )
    }

    /// System prompt for the execution phase
    pub fn executor_system() -> &'static str {
        r#"You are a precise problem solver. Execute plans carefully, showing
all intermediate work. Always output valid JSON in the exact format requested.
Be thorough in calculations and clear in explanations."#
    }

    /// User prompt for the execution phase
    pub fn executor_prompt(question: &str, plan: &str) -> String {
        format!(
            r#"You are solving the following question by following a specific plan.

Question: {}

Plan to follow:
{}

Execute each step of the plan carefully. Show your intermediate work and calculations.

IMPORTANT: Respond ONLY with valid JSON. Do not include any explanatory text before or after the JSON.

Provide your response in this exact JSON format:
{{
    "answer": "<final short answer>",
    "reasoning": "<brief explanation of how you got the answer>",
    "intermediate_work": "<detailed step-by-step work showing calculations>"
}}

Make sure to:
- Follow the plan exactly
- Show all intermediate calculations
- Double-check arithmetic
- Provide a clear, concise final answer
- OUTPUT ONLY THE JSON, NOTHING ELSE

JSON Response:"#,
            question, plan
        )
    }

    /// System prompt for the verification phase
    pub fn verifier_system() -> &'static str {
        r#"You are a rigorous verifier. Re-solve problems independently to check
answers. Verify arithmetic, logic, and constraints. Output only valid JSON in the requested format.
Be thorough and catch any errors or inconsistencies."#
    }

    /// User prompt for the verification phase
    pub fn verifier_prompt(question: &str, solution: &Solution) -> String {
        format!(
            r#"You are verifying a solution to a problem. Check if the solution is correct and consistent.

Question: {}

Proposed Solution:
Answer: {}
Reasoning: {}
Work: {}

Perform the following checks:
1. **Correctness Check**: Re-solve the problem independently. Does your answer match?
2. **Arithmetic Check**: Verify all calculations in the intermediate work.
3. **Logic Check**: Is the reasoning sound and does it follow logically?
4. **Constraint Check**: Are all constraints from the question satisfied?
5. **Units Check**: Are units consistent and correct?

IMPORTANT: Respond ONLY with valid JSON array. Do not include any explanatory text before or after the JSON.

Provide your verification as this exact JSON array format:
[
    {{
        "check_name": "Correctness Check",
        "passed": true,
        "details": "explanation here"
    }},
    {{
        "check_name": "Arithmetic Check",
        "passed": true,
        "details": "explanation here"
    }}
]

Be strict but fair. If something is wrong, explain what and why.
OUTPUT ONLY THE JSON ARRAY, NOTHING ELSE

JSON Array:"#,
            question, solution.answer, solution.reasoning, solution.intermediate_work
        )
    }
}
