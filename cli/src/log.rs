use colored::Colorize;
use mined_api::prelude::*;

/// Prints a bold, prominent title for major sections of output.
pub fn print_title(text: &str) {
    println!("{}", format!("\n{}", text).bold());
}

/// Prints an empty line to separate sections of output.
pub fn print_divider() {
    println!();
}

/// Prints a highlighted section header with yellow bold text and surrounding markers.
pub fn print_section_header(text: &str) {
    println!("{}", format!("\n=== {} ===", text).yellow().bold());
}

/// Prints an informational message with a cyan arrow prefix for emphasis.
pub fn print_message(text: &str) {
    println!("{}", format!("→ {}", text).cyan());
}

/// Prints a count or metric with a blue diamond prefix for quantitative data.
pub fn print_count(text: &str) {
    println!("{}", format!("⟐ {}", text).blue());
}

/// Prints an error message with a red cross prefix to indicate failure.
pub fn print_error(text: &str) {
    println!("{}", format!("✗ {}", text).red());
}

pub fn print_amount(label: &str, amount: Amount) {
    print_message(&format!("{}: {} MINED", label, amount_to_ui(amount)));
}

pub fn print_session(session: &MiningSession) {
    print_section_header("Mining Session");
    print_message(&format!("Id: {}", session.id));
    print_message(&format!("Owner: {}", session.owner));
    print_message(&format!("Work Type: {}", session.work_type));
    print_message(&format!("Difficulty: {}", session.difficulty));
    print_message(&format!("Target: {:#034x}", session.target));
    print_message(&format!("Started: {} (height {})", session.start_time, session.start_height));
    print_message(&format!("Status: {:?}", session.status()));
    if let Some(nonce) = session.nonce {
        print_message(&format!("Nonce: {}", nonce));
    }
    print_divider();
}

pub fn print_result(result: &PowResult) {
    print_section_header("PoW Result");
    print_message(&format!("Id: {}", result.id));
    print_message(&format!("Session: {}", result.session_id));
    print_message(&format!("Proof: {:#034x}", result.proof_value));
    print_message(&format!("Complexity: {}", result.complexity));
    print_message(&format!("Significance: {}", result.significance));
    print_amount("Gross Reward", result.gross_reward);
    print_amount("Burned", result.burned);
    print_amount("Net Reward", result.net_reward);
    print_message(&format!("Discovery: {}", result.discovery_id));
    print_divider();
}

pub fn print_discovery(discovery: &Discovery) {
    print_section_header("Discovery");
    print_message(&format!("Id: {}", discovery.id));
    print_message(&format!("Researcher: {}", discovery.researcher));
    print_message(&format!("Work Type: {}", discovery.work_type));
    print_message(&format!("Complexity: {}", discovery.complexity));
    print_message(&format!("Significance: {}", discovery.significance));
    print_message(&format!("Research Value: {}", discovery.research_value));
    print_message(&format!("Validations: {}", discovery.validation_count));
    print_message(&format!("Validated: {}", discovery.is_validated));
    print_message(&format!("From PoW: {}", discovery.is_from_pow));
    print_message(&format!("Collaborative: {}", discovery.is_collaborative));
    print_divider();
}

pub fn print_validator(validator: &ValidatorRecord) {
    print_section_header("Validator");
    print_message(&format!("Address: {}", validator.address));
    print_amount("Staked", validator.staked_amount);
    print_message(&format!("Validations: {}", validator.total_validations));
    print_message(&format!("Reputation: {}", validator.reputation));
    print_message(&format!("Active: {}", validator.is_active));
    print_divider();
}
