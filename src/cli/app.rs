// Command-line driver
// Walks through the RSA example or brute-forces a Caesar ciphertext

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use num_bigint::BigInt;

use crate::caesar::brute_force;
use crate::rsa::{decrypt, encrypt, encrypt_checked, generate_keys, RsaError};
use crate::util::config::DemoConfig;
use crate::util::display::{format_ciphertext, format_ciphertext_hex};

const USAGE: &str = "usage: textbook-rsa [rsa [P Q [MESSAGE...]]] | rot [TEXT...]";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Rsa(DemoConfig),
    /// `None` means the ciphertext is read from stdin
    Rot(Option<String>),
}

fn parse_prime(arg: &str, name: &str) -> anyhow::Result<BigInt> {
    arg.parse::<BigInt>()
        .with_context(|| format!("invalid value for {}: `{}`", name, arg))
}

impl Command {
    /// Parse the arguments that follow the program name
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        match args.next().as_deref() {
            None | Some("rsa") => {
                let rest: Vec<String> = args.collect();
                let config = match rest.as_slice() {
                    [] => DemoConfig::default(),
                    [_] => bail!("both P and Q are required\n{}", USAGE),
                    [p, q, message @ ..] => {
                        let config = DemoConfig::default()
                            .with_primes(parse_prime(p, "P")?, parse_prime(q, "Q")?);
                        if message.is_empty() {
                            config
                        } else {
                            config.with_message(message.join(" "))
                        }
                    }
                };
                Ok(Command::Rsa(config))
            }
            Some("rot") => {
                let rest: Vec<String> = args.collect();
                if rest.is_empty() {
                    Ok(Command::Rot(None))
                } else {
                    Ok(Command::Rot(Some(rest.join(" "))))
                }
            }
            Some(other) => bail!("unknown command `{}`\n{}", other, USAGE),
        }
    }
}

/// Generate keys, encrypt and decrypt, printing each step
pub fn run_rsa<W: Write, E: Write>(config: &DemoConfig, out: &mut W, err: &mut E) -> anyhow::Result<()> {
    let (public_key, private_key) = generate_keys(&config.p, &config.q)
        .context("key generation failed")?;
    writeln!(out, "Public Key (e, n): {}", public_key)?;
    writeln!(out, "Private Key (d, n): {}", private_key)?;

    writeln!(out, "Original Message: {}", config.message)?;

    let ciphertext = match encrypt_checked(&config.message, &public_key) {
        Ok(ciphertext) => ciphertext,
        Err(e @ RsaError::CharacterOutOfRange { .. }) => {
            writeln!(err, "Warning: {}; decryption will not round-trip", e)?;
            encrypt(&config.message, &public_key)
        }
        Err(e) => return Err(e.into()),
    };
    writeln!(out, "Encrypted Message: {}", format_ciphertext(&ciphertext))?;
    writeln!(out, "Encrypted Message (hex): {}", format_ciphertext_hex(&ciphertext))?;

    let decrypted = decrypt(&ciphertext, &private_key);
    writeln!(out, "Decrypted Message: {}", decrypted)?;

    Ok(())
}

/// Print every Caesar shift of `cipher`
pub fn run_rot<W: Write>(cipher: &str, out: &mut W) -> anyhow::Result<()> {
    for (shift, candidate) in brute_force(cipher) {
        writeln!(out, "Shift {:2}: {}", shift, candidate)?;
    }
    Ok(())
}

fn read_cipher_text() -> anyhow::Result<String> {
    print!("Enter the cipher text: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read cipher text from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

pub fn run() -> anyhow::Result<()> {
    let command = Command::parse(env::args().skip(1))?;

    match command {
        Command::Rsa(config) => run_rsa(&config, &mut io::stdout().lock(), &mut io::stderr()),
        Command::Rot(text) => {
            let cipher = match text {
                Some(text) => text,
                None => read_cipher_text()?,
            };
            run_rot(&cipher, &mut io::stdout().lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(Command::parse(args(&[])).unwrap(), Command::Rsa(DemoConfig::default()));
        assert_eq!(
            Command::parse(args(&["rsa"])).unwrap(),
            Command::Rsa(DemoConfig::default())
        );
    }

    #[test]
    fn test_parse_rsa_arguments() {
        let command = Command::parse(args(&["rsa", "11", "13", "hi", "there"])).unwrap();
        let expected = DemoConfig::default()
            .with_primes(BigInt::from(11), BigInt::from(13))
            .with_message("hi there");
        assert_eq!(command, Command::Rsa(expected));
    }

    #[test]
    fn test_parse_rsa_primes_only_keeps_default_message() {
        let command = Command::parse(args(&["rsa", "11", "13"])).unwrap();
        match command {
            Command::Rsa(config) => assert_eq!(config.message, "Hello RSA!"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse(args(&["rsa", "11"])).is_err());
        assert!(Command::parse(args(&["rsa", "eleven", "13"])).is_err());
        assert!(Command::parse(args(&["dh"])).is_err());
    }

    #[test]
    fn test_parse_rot() {
        assert_eq!(Command::parse(args(&["rot"])).unwrap(), Command::Rot(None));
        assert_eq!(
            Command::parse(args(&["rot", "Uryyb", "Jbeyq"])).unwrap(),
            Command::Rot(Some("Uryyb Jbeyq".to_string()))
        );
    }

    #[test]
    fn test_run_rsa_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_rsa(&DemoConfig::default(), &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Public Key (e, n): (7, 3233)"));
        assert!(out.contains("Private Key (d, n): (1783, 3233)"));
        assert!(out.contains("Encrypted Message: [1087, 3071, 1877, 1877, 3183, 2774, 1077, 1825, 1317, 2417]"));
        assert!(out.contains("Decrypted Message: Hello RSA!"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_rsa_warns_on_lossy_message() {
        let config = DemoConfig::default()
            .with_primes(BigInt::from(3), BigInt::from(5))
            .with_message("A");
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_rsa(&config, &mut out, &mut err).unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Warning: character 'A' (ordinal 65)"));
    }

    #[test]
    fn test_run_rsa_rejects_non_prime() {
        let config = DemoConfig::default().with_primes(BigInt::from(4), BigInt::from(53));
        let result = run_rsa(&config, &mut Vec::<u8>::new(), &mut Vec::<u8>::new());

        let e = result.unwrap_err();
        assert!(matches!(
            e.downcast_ref::<RsaError>(),
            Some(RsaError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_run_rot_output() {
        let mut out = Vec::new();
        run_rot("Uryyb", &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "Shift  0: Uryyb");
        assert_eq!(lines[13], "Shift 13: Hello");
    }
}
