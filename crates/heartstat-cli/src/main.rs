mod command;
mod plot;
mod report;

fn main() -> anyhow::Result<()> {
    command::run()
}
