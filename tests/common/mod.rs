use assert_cmd::Command;

pub fn tagmark_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagmark").unwrap();
    cmd.env_remove("TAGMARK_ROOT");
    cmd
}
