use assert_cmd::Command;

pub fn yearcode_cmd() -> Command {
    let mut cmd = Command::cargo_bin("yearcode").unwrap();
    cmd.env_remove("YEARCODE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
