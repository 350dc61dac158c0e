use anyhow::{anyhow, Result};

use mined_api::prelude::*;
use mined_client::EngineHandle;

use crate::cli::{Cli, Commands};
use crate::log;

pub async fn handle_research_commands(cli: Cli, handle: &EngineHandle, signer: Address) -> Result<()> {
    match cli.command {
        Commands::Discover {
            work_type,
            complexity,
            significance,
            research_value,
            collaborative,
        } => {
            let outcome = handle
                .execute(
                    signer,
                    Instruction::SubmitDiscovery {
                        work_type,
                        complexity,
                        significance,
                        research_value,
                        is_collaborative: collaborative,
                    },
                )
                .await?;
            let Outcome::DiscoveryRecorded { discovery_id } = outcome else {
                return Err(anyhow!("unexpected outcome: {:?}", outcome));
            };
            if let Some(discovery) = handle.discovery(discovery_id).await {
                log::print_discovery(&discovery);
            }
        }
        Commands::Validate { discovery_id } => {
            let outcome = handle
                .execute(signer, Instruction::ValidateDiscovery { discovery_id })
                .await?;
            if let Outcome::DiscoveryValidated { validation_count } = outcome {
                log::print_count(&format!(
                    "Discovery {} has {} validation(s)",
                    discovery_id, validation_count
                ));
            }
            log::print_amount("Balance", handle.balance_of(signer).await);
        }
        _ => {}
    }
    Ok(())
}
