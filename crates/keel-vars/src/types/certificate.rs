//! X.509 certificates.

use super::{opt_bool, opt_str, opt_str_list, opt_u64};
use crate::cert_loader::VarsCertLoader;
use keel_types::{bail, KeelError, Result, ValueGenerator, Variables};
use rcgen::{
    BasicConstraints, Certificate, CertificateParams, DistinguishedName, DnType,
    ExtendedKeyUsagePurpose, IsCa, SanType,
};
use serde_yaml::{Mapping, Value};
use std::net::IpAddr;
use time::{Duration, OffsetDateTime};

const DEFAULT_DURATION_DAYS: u64 = 365;
const SECONDS_PER_DAY: i64 = 86_400;

/// Generates `{ca, certificate, private_key}`.
///
/// Options:
/// - `common_name` (required)
/// - `alternative_names`: DNS names or IP addresses
/// - `is_ca`: mark the certificate as a CA
/// - `ca`: name of the variable holding the signing CA; self-signed if absent
/// - `extended_key_usage`: `server_auth` and/or `client_auth`
/// - `duration`: validity in days (default 365)
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateGenerator;

#[derive(Debug)]
struct CertOptions {
    common_name: String,
    alternative_names: Vec<String>,
    is_ca: bool,
    ca: Option<String>,
    extended_key_usage: Vec<ExtendedKeyUsagePurpose>,
    duration_days: u64,
}

impl CertOptions {
    fn parse(options: &Mapping) -> Result<Self> {
        let common_name = opt_str(options, "common_name")?
            .filter(|cn| !cn.is_empty())
            .ok_or_else(|| {
                KeelError::Validation("Expected option 'common_name' to be set".to_string())
            })?
            .to_string();

        let extended_key_usage = opt_str_list(options, "extended_key_usage")?
            .iter()
            .map(|usage| match usage.as_str() {
                "server_auth" => Ok(ExtendedKeyUsagePurpose::ServerAuth),
                "client_auth" => Ok(ExtendedKeyUsagePurpose::ClientAuth),
                other => Err(KeelError::Validation(format!(
                    "Unsupported extended key usage: {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let duration_days = match opt_u64(options, "duration")? {
            None => DEFAULT_DURATION_DAYS,
            Some(0) => bail!(Validation, "Expected option 'duration' to be greater than 0"),
            Some(days) => days,
        };

        Ok(Self {
            common_name,
            alternative_names: opt_str_list(options, "alternative_names")?,
            is_ca: opt_bool(options, "is_ca")?.unwrap_or(false),
            ca: opt_str(options, "ca")?.filter(|ca| !ca.is_empty()).map(String::from),
            extended_key_usage,
            duration_days,
        })
    }

    fn to_params(&self) -> Result<CertificateParams> {
        let mut params = CertificateParams::new(Vec::<String>::new());

        let mut name = DistinguishedName::new();
        name.push(DnType::CommonName, self.common_name.clone());
        params.distinguished_name = name;

        params.subject_alt_names = self
            .alternative_names
            .iter()
            .map(|san| match san.parse::<IpAddr>() {
                Ok(ip) => SanType::IpAddress(ip),
                Err(_) => SanType::DnsName(san.clone()),
            })
            .collect();

        if self.is_ca {
            params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        }
        params.extended_key_usages = self.extended_key_usage.clone();

        let now = OffsetDateTime::now_utc();
        params.not_before = now;
        params.not_after = i64::try_from(self.duration_days)
            .ok()
            .and_then(|days| days.checked_mul(SECONDS_PER_DAY))
            .and_then(|secs| now.checked_add(Duration::seconds(secs)))
            .ok_or_else(|| {
                KeelError::Validation(format!(
                    "Expected option 'duration' to be a representable number of days, got {}",
                    self.duration_days
                ))
            })?;
        Ok(params)
    }
}

impl ValueGenerator for CertificateGenerator {
    fn generate(&self, options: &Mapping, lookup: &dyn Variables) -> Result<Value> {
        let opts = CertOptions::parse(options)?;

        let cert = Certificate::from_params(opts.to_params()?)
            .map_err(|e| KeelError::Certificate(format!("Generating certificate: {}", e)))?;
        let private_key = cert.serialize_private_key_pem();

        let (certificate, ca) = match &opts.ca {
            Some(ca_name) => {
                let ca = VarsCertLoader::new(lookup).load_certs(ca_name)?;
                let pem = cert
                    .serialize_pem_with_signer(&ca.signer)
                    .map_err(|e| KeelError::Certificate(format!("Signing certificate: {}", e)))?;
                (pem, ca.certificate)
            }
            None => {
                let pem = cert
                    .serialize_pem()
                    .map_err(|e| KeelError::Certificate(format!("Signing certificate: {}", e)))?;
                (pem.clone(), pem)
            }
        };

        let mut value = Mapping::new();
        value.insert("ca".into(), Value::String(ca));
        value.insert("certificate".into(), Value::String(certificate));
        value.insert("private_key".into(), Value::String(private_key));
        Ok(Value::Mapping(value))
    }
}
