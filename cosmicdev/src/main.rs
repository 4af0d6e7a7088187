mod application;
mod presentation {
    pub mod cli;
}

fn main() -> cosmic_core::Result<()> {
    application::run()
}
