// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

// Runs the built binaries end to end.
#[cfg(test)]
mod tests {
    use std::fs;
    use std::process::Command;

    use assert_cmd::prelude::CommandCargoExt;
    use tempfile::TempDir;

    use trust_store::test_helpers::certificate_pem;

    const PASSWORD_ENV_VAR: &str = "JKS_TRUST_STORE_PASSWORD";

    #[test]
    fn error_if_no_chains_or_config_given() {
        let output = Command::cargo_bin("jks-create-trust-store")
            .unwrap()
            .env_remove(PASSWORD_ENV_VAR)
            .output()
            .unwrap();
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("error"));
    }

    #[test]
    fn created_trust_store_can_be_inspected() {
        let temp_dir = TempDir::new().unwrap();
        let chain_path = temp_dir.path().join("root.pem");
        let jks_path = temp_dir.path().join("truststore.jks");
        fs::write(&chain_path, certificate_pem(b"root certificate")).unwrap();

        let create = Command::cargo_bin("jks-create-trust-store")
            .unwrap()
            .env(PASSWORD_ENV_VAR, "changeit")
            .arg(&chain_path)
            .arg("--output")
            .arg(&jks_path)
            .output()
            .unwrap();
        assert!(create.status.success());
        assert!(String::from_utf8_lossy(&create.stdout).starts_with("id: "));

        let inspect = Command::cargo_bin("jks-inspect-trust-store")
            .unwrap()
            .env(PASSWORD_ENV_VAR, "changeit")
            .arg(&jks_path)
            .output()
            .unwrap();
        assert!(inspect.status.success());
        let stdout = String::from_utf8_lossy(&inspect.stdout);
        assert!(stdout.starts_with("1 entries\n0\tX.509\t16 bytes\t"), "{stdout}");

        let wrong_password = Command::cargo_bin("jks-inspect-trust-store")
            .unwrap()
            .env(PASSWORD_ENV_VAR, "wrong")
            .arg(&jks_path)
            .output()
            .unwrap();
        assert!(!wrong_password.status.success());
    }

    #[test]
    fn deny_warnings_fails_on_trailing_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let chain_path = temp_dir.path().join("chain.pem");
        fs::write(&chain_path, format!("{}garbage", certificate_pem(b"a"))).unwrap();

        let lenient = Command::cargo_bin("jks-create-trust-store")
            .unwrap()
            .env_remove(PASSWORD_ENV_VAR)
            .arg(&chain_path)
            .output()
            .unwrap();
        assert!(lenient.status.success());
        assert!(String::from_utf8_lossy(&lenient.stderr)
            .contains("chain 0, certificate 1: failed to load PEM"));

        let denied = Command::cargo_bin("jks-create-trust-store")
            .unwrap()
            .env_remove(PASSWORD_ENV_VAR)
            .arg(&chain_path)
            .arg("--deny-warnings")
            .output()
            .unwrap();
        assert!(!denied.status.success());
    }
}
