pub mod engineers;
pub mod init;
pub mod run;

pub use engineers::cmd_engineers;
pub use init::cmd_init;
pub use run::cmd_run;
