//! Prefix text commands.

/// A recognized text command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rank,
    MyScore,
    Help,
    ForceDrop,
    SetupJoinMessage,
    Diagnostics,
}

impl Command {
    /// Parses a message into a command.
    ///
    /// The command name must follow the prefix directly and is matched case
    /// insensitively; anything after it is ignored.
    ///
    /// # Returns
    /// - `Some(Command)` - Message invokes a known command
    /// - `None` - Message lacks the prefix or names an unknown command
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let name = content
            .trim_start()
            .strip_prefix(prefix)?
            .split(char::is_whitespace)
            .next()?
            .to_lowercase();

        match name.as_str() {
            "rank" => Some(Self::Rank),
            "meuspontos" | "myscore" => Some(Self::MyScore),
            "shelp" | "help" => Some(Self::Help),
            "forcedrop" => Some(Self::ForceDrop),
            "setupjoinmessage" => Some(Self::SetupJoinMessage),
            "diagnostics" => Some(Self::Diagnostics),
            _ => None,
        }
    }

    /// Whether only guild administrators may run the command.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::ForceDrop | Self::SetupJoinMessage | Self::Diagnostics
        )
    }
}
