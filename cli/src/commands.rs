//! Subcommand implementations. Each returns whether the input was accepted.

use anyhow::Context;
use centauri_governance::{
    check_msgs, is_module_whitelisted, is_proposal_whitelisted, whitelisted_params,
    whitelisted_type_urls,
};
use centauri_mint::decode_store;
use centauri_store::KvPair;
use centauri_types::{Msg, ProposalContent};
use std::io::Write;
use std::path::Path;

fn verdict(allowed: bool) -> &'static str {
    if allowed {
        "allowed"
    } else {
        "rejected"
    }
}

pub fn check_msg(out: &mut impl Write, type_url: &str) -> anyhow::Result<bool> {
    let allowed = is_module_whitelisted(type_url);
    writeln!(out, "{}", verdict(allowed))?;
    Ok(allowed)
}

pub fn check_proposal(out: &mut impl Write, path: &Path) -> anyhow::Result<bool> {
    let content: ProposalContent = read_json(path)?;
    let allowed = is_proposal_whitelisted(&content);
    writeln!(out, "{} {}", verdict(allowed), content.type_url())?;
    Ok(allowed)
}

pub fn check_tx(out: &mut impl Write, path: &Path) -> anyhow::Result<bool> {
    let msgs: Vec<Msg> = read_json(path)?;
    match check_msgs(&msgs) {
        Ok(()) => {
            writeln!(out, "allowed")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "rejected: {e}")?;
            Ok(false)
        }
    }
}

pub fn print_whitelist(out: &mut impl Write) -> anyhow::Result<bool> {
    writeln!(out, "# message types")?;
    for url in whitelisted_type_urls() {
        writeln!(out, "{url}")?;
    }
    writeln!(out, "# params")?;
    for (module, key) in whitelisted_params() {
        writeln!(out, "{module}/{key}")?;
    }
    Ok(true)
}

pub fn decode_mint(out: &mut impl Write, key: &str, a: &str, b: &str) -> anyhow::Result<bool> {
    let key = hex::decode(key).context("key is not valid hex")?;
    let kv_a = KvPair::new(key.clone(), hex::decode(a).context("value A is not valid hex")?);
    let kv_b = KvPair::new(key, hex::decode(b).context("value B is not valid hex")?);
    match decode_store(&kv_a, &kv_b) {
        Ok(diff) => {
            writeln!(out, "{diff}")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "error: {e}")?;
            Ok(false)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<bool>) -> (bool, String) {
        let mut out = Vec::new();
        let ok = f(&mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    fn json_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn check_msg_prints_verdict() {
        assert_eq!(
            run(|o| check_msg(o, "/cosmos.gov.v1.MsgUpdateParams")),
            (true, "allowed\n".to_string())
        );
        assert_eq!(
            run(|o| check_msg(o, "/cosmos.bank.v1beta1.MsgSend")),
            (false, "rejected\n".to_string())
        );
    }

    #[test]
    fn check_proposal_reads_json_content() {
        let file = json_file(
            r#"{"type": "parameter_change", "title": "t", "description": "d",
                "changes": [{"subspace": "staking", "key": "MaxValidators", "value": "150"}]}"#,
        );
        let (ok, text) = run(|o| check_proposal(o, file.path()));
        assert!(ok);
        assert!(text.starts_with("allowed"));
    }

    #[test]
    fn check_tx_reports_offending_message() {
        let file = json_file(
            r#"[{"type": "submit_proposal", "value": {"proposer": "centauri1p",
                "messages": [{"type": "other", "value": {"type_url": "/cosmos.bank.v1beta1.MsgSend"}}]}}]"#,
        );
        let (ok, text) = run(|o| check_tx(o, file.path()));
        assert!(!ok);
        assert!(text.contains("/cosmos.bank.v1beta1.MsgSend"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let file = json_file("{not json");
        let mut out = Vec::new();
        assert!(check_proposal(&mut out, file.path()).is_err());
    }

    #[test]
    fn whitelist_lists_both_tables() {
        let (_, text) = run(|o| print_whitelist(o));
        assert!(text.contains("/ibc.lightclients.wasm.v1.MsgUpdateWasmCodeId"));
        assert!(text.contains("icahost/AllowMessages"));
    }

    #[test]
    fn decode_mint_reports_unknown_prefix() {
        let (ok, text) = run(|o| decode_mint(o, "01", "", ""));
        assert!(!ok);
        assert_eq!(text, "error: invalid mint key prefix 01\n");
    }

    #[test]
    fn decode_mint_rejects_bad_hex() {
        let mut out = Vec::new();
        assert!(decode_mint(&mut out, "zz", "", "").is_err());
    }
}
