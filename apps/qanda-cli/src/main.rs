use clap::Parser;
use std::path::Path;

use qanda_client::{FileStore, HttpEventGateway, Session, StoreError};

mod cli;
mod commands;

use cli::{AnswersCommand, Cli, Command, InviteCommand, QuestionCommand};

fn open_store(credentials: Option<&Path>) -> Result<FileStore, StoreError> {
    match credentials {
        Some(path) => FileStore::open_at(path),
        None => FileStore::open(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let gateway = HttpEventGateway::new(&cli.server);
    let store = open_store(cli.credentials.as_deref())?;
    let mut session = Session::new(store);

    match cli.command {
        Command::Types => {
            commands::cmd_types(&gateway).await?;
        }
        Command::Create {
            name,
            event_type,
            username,
        } => {
            commands::cmd_create(&gateway, &mut session, &name, &event_type, &username).await?;
        }
        Command::Access { event_name, code } => {
            commands::cmd_access(&gateway, &mut session, &event_name, code.as_deref()).await?;
        }
        Command::Join {
            event_name,
            invite_code,
            username,
        } => {
            commands::cmd_join(&gateway, &mut session, &event_name, &invite_code, &username)
                .await?;
        }
        Command::Question { question_cmd } => match question_cmd {
            QuestionCommand::Add {
                event,
                text,
                options,
                correct,
            } => {
                commands::cmd_question_add(&gateway, &mut session, &event, &text, options, correct)
                    .await?;
            }
            QuestionCommand::Delete { event, question_id } => {
                commands::cmd_question_delete(&gateway, &mut session, &event, &question_id)
                    .await?;
            }
        },
        Command::Invite { invite_cmd } => match invite_cmd {
            InviteCommand::Add { event, username } => {
                commands::cmd_invite_add(&gateway, &mut session, &event, &username).await?;
            }
            InviteCommand::Delete { event, invite_code } => {
                commands::cmd_invite_delete(&gateway, &mut session, &event, &invite_code).await?;
            }
            InviteCommand::List { event } => {
                commands::cmd_invite_list(&gateway, &mut session, &event).await?;
            }
        },
        Command::Answers { answers_cmd } => match answers_cmd {
            AnswersCommand::Submit { event, answers } => {
                commands::cmd_answers_submit(&gateway, &mut session, &event, &answers).await?;
            }
            AnswersCommand::Status { event } => {
                commands::cmd_answers_status(&gateway, &mut session, &event).await?;
            }
        },
        Command::Results { event } => {
            commands::cmd_results(&gateway, &mut session, &event).await?;
        }
        Command::Status { route, event_name } => {
            commands::cmd_status(&gateway, &mut session, &route, event_name.as_deref()).await?;
        }
        Command::Logout => {
            commands::cmd_logout(&mut session)?;
        }
    }

    Ok(())
}
