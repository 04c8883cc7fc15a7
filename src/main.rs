use anyhow::Result;

fn main() -> Result<()> {
    move_learners::cli::run()
}
