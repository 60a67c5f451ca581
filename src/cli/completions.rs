use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print zsh completions:\n    despace completions zsh\n\n\
                  Install bash completions:\n    despace completions bash > ~/.local/share/bash-completion/completions/despace")]
pub struct CompletionsArgs {
    /// Shell to generate for: bash, elvish, fish, powershell (or pwsh), zsh
    pub shell: String,
}
