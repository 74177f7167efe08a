//! Blocking HTTP client for the sign-in / sign-out endpoints.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Serialize;
use std::time::Duration;

use super::response::{ApiResponse, SIGN_IN_RULE, SIGN_OUT_RULE, SuccessRule};
use crate::auth::Token;
use crate::config::Config;
use crate::errors::AppResult;
use crate::geo::GeoJitter;
use crate::models::coordinate::Coordinate;
use crate::ui::messages::{info, warning};

/// The two remote operations the coordinator needs.
/// Both return `true` on success, including "already recorded today".
pub trait CheckInApi {
    fn sign_in(&self, token: &Token) -> bool;
    fn sign_out(&self, token: &Token) -> bool;
}

/// "Free exercise" activity type.
const FREE_EXERCISE: u8 = 2;

#[derive(Debug, Serialize)]
struct SignInPayload {
    #[serde(rename = "sportType")]
    sport_type: u8,
    longitude: String,
    latitude: String,
    #[serde(rename = "courseInfoId")]
    course_info_id: &'static str,
}

#[derive(Debug, Serialize)]
struct SignOutPayload {
    longitude: String,
    latitude: String,
}

/// Endpoint and transport settings, taken from [`Config`].
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub sign_in_url: String,
    pub sign_out_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Honor `HTTP(S)_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl RemoteSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            sign_in_url: cfg.sign_in_url.clone(),
            sign_out_url: cfg.sign_out_url.clone(),
            user_agent: cfg.user_agent.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
            use_system_proxy: cfg.use_system_proxy,
        }
    }
}

pub struct HttpCheckInClient {
    http: Client,
    settings: RemoteSettings,
    jitter: GeoJitter,
}

impl HttpCheckInClient {
    pub fn new(settings: RemoteSettings, jitter: GeoJitter) -> AppResult<Self> {
        let mut builder = Client::builder().timeout(settings.timeout);
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            settings,
            jitter,
        })
    }

    fn post<P: Serialize>(
        &self,
        label: &str,
        url: &str,
        token: &Token,
        payload: &P,
        rule: SuccessRule,
    ) -> bool {
        let result = self
            .http
            .post(url)
            .header("Token", token.as_str())
            .header(USER_AGENT, &self.settings.user_agent)
            .json(payload)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<ApiResponse>());

        match result {
            Ok(resp) => {
                info(format!("[{} response] {}", label, resp.message()));
                if rule.is_already_recorded(&resp) {
                    info(format!("{}: already recorded on the server today", label));
                }
                rule.accepts(&resp)
            }
            Err(e) => {
                warning(format!("{} request failed: {}", label, e));
                false
            }
        }
    }

    fn location(&self) -> Coordinate {
        self.jitter.sample()
    }
}

impl CheckInApi for HttpCheckInClient {
    fn sign_in(&self, token: &Token) -> bool {
        let at = self.location();
        let payload = SignInPayload {
            sport_type: FREE_EXERCISE,
            longitude: at.longitude_text(),
            latitude: at.latitude_text(),
            course_info_id: "null",
        };
        self.post(
            "sign-in",
            &self.settings.sign_in_url,
            token,
            &payload,
            SIGN_IN_RULE,
        )
    }

    fn sign_out(&self, token: &Token) -> bool {
        let at = self.location();
        let payload = SignOutPayload {
            longitude: at.longitude_text(),
            latitude: at.latitude_text(),
        };
        self.post(
            "sign-out",
            &self.settings.sign_out_url,
            token,
            &payload,
            SIGN_OUT_RULE,
        )
    }
}
