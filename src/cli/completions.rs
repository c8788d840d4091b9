use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    frontpage completions bash > ~/.bash_completion.d/frontpage\n\n\
                  Generate zsh completions:\n    frontpage completions zsh > ~/.zfunc/_frontpage\n\n\
                  Generate fish completions:\n    frontpage completions fish > ~/.config/fish/completions/frontpage.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
