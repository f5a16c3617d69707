use assert_cmd::Command;

pub fn vaultport_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vaultport").unwrap();
    cmd.env_remove("VAULTPORT_BLOG_DIR");
    cmd.env_remove("VAULTPORT_DIARY_DIR");
    cmd.env_remove("VAULTPORT_IMAGES_DIR");
    cmd.env_remove("VAULTPORT_CONTENT_OUT_DIR");
    cmd.env_remove("VAULTPORT_IMAGES_OUT_DIR");
    cmd
}
