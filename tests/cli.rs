use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "dockdash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Read-only terminal dashboard"));
}

#[test]
/// Version flag should print the crate version.
fn cli_version_displays_version() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
/// An unsupported DOCKER_HOST must fail before the terminal is touched.
fn cli_rejects_unix_socket_docker_host() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("DOCKER_HOST", "unix:///var/run/docker.sock")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
