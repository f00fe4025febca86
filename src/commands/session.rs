use super::CommandOutput;
use crate::app::{
    session_create, session_delete, session_get, session_list, session_sets, session_update,
    SessionCreateReq, SessionUpdateReq,
};
use crate::domain::SetInput;
use crate::error::AppError;
use crate::infra::Database;
use chrono::{DateTime, Utc};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SessionCmd {
    /// List all sessions
    List,
    /// Show one session with its exercises and sets
    Show { id: i64 },
    /// Show the flat set list of a session
    Sets { id: i64 },
    /// Record a new session
    Add {
        #[arg(long)]
        description: String,
        /// RFC 3339 timestamp; defaults to now
        #[arg(long)]
        date: Option<DateTime<Utc>>,
        /// EXERCISE_ID:REPS[:WEIGHT], repeat in the order performed
        #[arg(long = "set", value_parser = parse_set, required = true)]
        sets: Vec<SetInput>,
    },
    /// Replace a session's description, date and every set
    Replace {
        id: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<DateTime<Utc>>,
        #[arg(long = "set", value_parser = parse_set, required = true)]
        sets: Vec<SetInput>,
    },
    /// Delete a session and its sets
    Delete { id: i64 },
}

/// Parse `EXERCISE_ID:REPS[:WEIGHT]`; weight defaults to 0.
pub fn parse_set(raw: &str) -> Result<SetInput, String> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let (exercise, reps, weight) = match parts.as_slice() {
        [exercise, reps] => (*exercise, *reps, "0"),
        [exercise, reps, weight] => (*exercise, *reps, *weight),
        _ => return Err(format!("expected EXERCISE_ID:REPS[:WEIGHT], got '{}'", raw)),
    };
    Ok(SetInput {
        exercise_id: exercise
            .parse()
            .map_err(|_| format!("invalid exercise id '{}'", exercise))?,
        reps: reps.parse().map_err(|_| format!("invalid reps '{}'", reps))?,
        weight: weight
            .parse()
            .map_err(|_| format!("invalid weight '{}'", weight))?,
    })
}

pub fn cmd_session(db: &Database, cmd: SessionCmd) -> Result<CommandOutput, AppError> {
    let out = match cmd {
        SessionCmd::List => CommandOutput::Sessions(session_list(db)?),
        SessionCmd::Show { id } => CommandOutput::SessionDetail(session_get(db, id)?),
        SessionCmd::Sets { id } => CommandOutput::Sets(session_sets(db, id)?),
        SessionCmd::Add {
            description,
            date,
            sets,
        } => CommandOutput::SessionDetail(session_create(
            db,
            SessionCreateReq {
                description,
                date,
                sets,
            },
        )?),
        SessionCmd::Replace {
            id,
            description,
            date,
            sets,
        } => CommandOutput::SessionDetail(session_update(
            db,
            SessionUpdateReq {
                id,
                description,
                date,
                sets,
            },
        )?),
        SessionCmd::Delete { id } => {
            session_delete(db, id)?;
            CommandOutput::Deleted { deleted: id }
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_set_with_weight() {
        let set = parse_set("3:8:62.5").unwrap();
        assert_eq!(set.exercise_id, 3);
        assert_eq!(set.reps, 8);
        assert_eq!(set.weight, 62.5);
    }

    #[test]
    fn parse_set_without_weight_defaults_to_zero() {
        let set = parse_set("4:12").unwrap();
        assert_eq!(set.weight, 0.0);
    }

    #[test]
    fn parse_set_rejects_garbage() {
        assert!(parse_set("bench").is_err());
        assert!(parse_set("1:x:10").is_err());
        assert!(parse_set("1:2:3:4").is_err());
    }
}
