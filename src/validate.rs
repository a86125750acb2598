//! Opt-in structural checks for callers that want stricter documents.
//!
//! Nothing in the encoder or decoder calls into this module.

use std::fmt;

use url::Url;

use crate::error::{Result, VastError};
use crate::models::*;

/// The variant an [`Ad`] carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdKind<'a> {
    InLine(&'a InLine),
    Wrapper(&'a Wrapper),
}

/// The variant a [`Creative`] carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CreativeKind<'a> {
    Linear(&'a Linear),
    CompanionAds(&'a CompanionAds),
    NonLinearAds(&'a NonLinearAds),
}

impl Ad {
    /// Fails with `UnsupportedStructure` unless exactly one of InLine/Wrapper is set
    pub fn kind(&self) -> Result<AdKind<'_>> {
        match (&self.inline, &self.wrapper) {
            (Some(inline), None) => Ok(AdKind::InLine(inline)),
            (None, Some(wrapper)) => Ok(AdKind::Wrapper(wrapper)),
            (Some(_), Some(_)) => Err(VastError::UnsupportedStructure(format!(
                "Ad {:?} has both InLine and Wrapper",
                self.id
            ))),
            (None, None) => Err(VastError::UnsupportedStructure(format!(
                "Ad {:?} has neither InLine nor Wrapper",
                self.id
            ))),
        }
    }
}

impl Creative {
    /// `Ok(None)` for an empty creative; fails when more than one kind is set
    pub fn kind(&self) -> Result<Option<CreativeKind<'_>>> {
        let mut kinds = Vec::with_capacity(1);
        if let Some(linear) = &self.linear {
            kinds.push(CreativeKind::Linear(linear));
        }
        if let Some(companion_ads) = &self.companion_ads {
            kinds.push(CreativeKind::CompanionAds(companion_ads));
        }
        if let Some(non_linear_ads) = &self.non_linear_ads {
            kinds.push(CreativeKind::NonLinearAds(non_linear_ads));
        }
        match kinds.as_slice() {
            [] => Ok(None),
            [kind] => Ok(Some(*kind)),
            _ => Err(VastError::UnsupportedStructure(format!(
                "Creative {:?} has {} of Linear/CompanionAds/NonLinearAds",
                self.id,
                kinds.len()
            ))),
        }
    }
}

impl Wrapper {
    /// The redirect target, for the transport layer that fetches it
    pub fn ad_tag_url(&self) -> Result<Url> {
        Ok(Url::parse(self.vast_ad_tag_uri.trim())?)
    }
}

/// A problem found by [`check_structure`] or [`unknown_values`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location in the tree, e.g. `Ad[0]/InLine/Creatives/Creative[1]`
    pub path: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Report every Ad and Creative whose variant is ambiguous or missing
pub fn check_structure(vast: &Vast) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (i, ad) in vast.ads.iter().enumerate() {
        let ad_path = format!("Ad[{i}]");
        if let Err(e) = ad.kind() {
            issues.push(issue(&ad_path, &e));
        }
        for (section, creatives) in ad_creatives(ad) {
            for (j, creative) in creatives.creatives.iter().enumerate() {
                if let Err(e) = creative.kind() {
                    issues.push(issue(&format!("{ad_path}/{section}/Creatives/Creative[{j}]"), &e));
                }
            }
        }
    }
    issues
}

/// Report tracking events and delivery modes outside the VAST 2.0 sets
pub fn unknown_values(vast: &Vast) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (i, ad) in vast.ads.iter().enumerate() {
        for (section, creatives) in ad_creatives(ad) {
            for (j, creative) in creatives.creatives.iter().enumerate() {
                let path = format!("Ad[{i}]/{section}/Creatives/Creative[{j}]");
                if let Some(linear) = &creative.linear {
                    check_tracking(&format!("{path}/Linear"), linear.tracking_events.as_ref(), &mut issues);
                    for (k, media_file) in linear.media_files.media_files.iter().enumerate() {
                        if !media_file.delivery.is_known() {
                            issues.push(Issue {
                                path: format!("{path}/Linear/MediaFiles/MediaFile[{k}]"),
                                message: format!("unknown delivery {:?}", media_file.delivery.as_str()),
                            });
                        }
                    }
                }
                if let Some(companion_ads) = &creative.companion_ads {
                    for (k, companion) in companion_ads.companions.iter().enumerate() {
                        check_tracking(
                            &format!("{path}/CompanionAds/Companion[{k}]"),
                            companion.tracking_events.as_ref(),
                            &mut issues,
                        );
                    }
                }
                if let Some(non_linear_ads) = &creative.non_linear_ads {
                    check_tracking(
                        &format!("{path}/NonLinearAds"),
                        non_linear_ads.tracking_events.as_ref(),
                        &mut issues,
                    );
                    for (k, non_linear) in non_linear_ads.non_linears.iter().enumerate() {
                        check_tracking(
                            &format!("{path}/NonLinearAds/NonLinear[{k}]"),
                            non_linear.tracking_events.as_ref(),
                            &mut issues,
                        );
                    }
                }
            }
        }
    }
    issues
}

fn ad_creatives(ad: &Ad) -> Vec<(&'static str, &Creatives)> {
    let mut sections = Vec::new();
    if let Some(inline) = &ad.inline {
        sections.push(("InLine", &inline.creatives));
    }
    if let Some(wrapper) = &ad.wrapper {
        sections.push(("Wrapper", &wrapper.creatives));
    }
    sections
}

fn check_tracking(path: &str, events: Option<&TrackingEvents>, issues: &mut Vec<Issue>) {
    let Some(events) = events else {
        return;
    };
    for (i, tracking) in events.tracking.iter().enumerate() {
        if !tracking.event.is_known() {
            issues.push(Issue {
                path: format!("{path}/TrackingEvents/Tracking[{i}]"),
                message: format!("unknown tracking event {:?}", tracking.event.as_str()),
            });
        }
    }
}

fn issue(path: &str, error: &VastError) -> Issue {
    Issue {
        path: path.to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Delivery, TrackingEvent};
    use crate::error::ErrorKind;

    fn inline_ad(creatives: Vec<Creative>) -> Ad {
        Ad {
            id: "1".to_string(),
            inline: Some(InLine {
                creatives: Creatives { creatives },
                ..Default::default()
            }),
            wrapper: None,
        }
    }

    #[test]
    fn ad_kind_accepts_exactly_one_variant() {
        let ad = inline_ad(Vec::new());
        assert!(matches!(ad.kind(), Ok(AdKind::InLine(_))));

        let wrapper = Ad {
            wrapper: Some(Wrapper::default()),
            ..Default::default()
        };
        assert!(matches!(wrapper.kind(), Ok(AdKind::Wrapper(_))));
    }

    #[test]
    fn ad_kind_rejects_both_and_neither() {
        let both = Ad {
            id: "x".to_string(),
            inline: Some(InLine::default()),
            wrapper: Some(Wrapper::default()),
        };
        let err = both.kind().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedStructure);
        assert!(err.to_string().contains("both"));

        let neither = Ad::default();
        assert_eq!(neither.kind().unwrap_err().kind(), ErrorKind::UnsupportedStructure);
    }

    #[test]
    fn creative_kind_allows_empty_but_not_multiple() {
        assert!(matches!(Creative::default().kind(), Ok(None)));

        let linear = Creative {
            linear: Some(Linear::default()),
            ..Default::default()
        };
        assert!(matches!(linear.kind(), Ok(Some(CreativeKind::Linear(_)))));

        let mixed = Creative {
            linear: Some(Linear::default()),
            companion_ads: Some(CompanionAds::default()),
            ..Default::default()
        };
        assert!(mixed.kind().is_err());
    }

    #[test]
    fn check_structure_reports_paths() {
        let mixed = Creative {
            linear: Some(Linear::default()),
            non_linear_ads: Some(NonLinearAds::default()),
            ..Default::default()
        };
        let vast = Vast {
            version: "2.0".to_string(),
            ads: vec![inline_ad(vec![Creative::default(), mixed]), Ad::default()],
        };
        let issues = check_structure(&vast);
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["Ad[0]/InLine/Creatives/Creative[1]", "Ad[1]"]);
    }

    #[test]
    fn unknown_values_flags_passthrough_enums() {
        let linear = Linear {
            tracking_events: Some(TrackingEvents {
                tracking: vec![
                    Tracking::new(TrackingEvent::Start, "http://t/start"),
                    Tracking::new(TrackingEvent::from("progress"), "http://t/progress"),
                ],
            }),
            media_files: MediaFiles {
                media_files: vec![MediaFile {
                    delivery: Delivery::from("download"),
                    ..Default::default()
                }],
            },
            ..Default::default()
        };
        let vast = Vast {
            version: "2.0".to_string(),
            ads: vec![inline_ad(vec![Creative {
                linear: Some(linear),
                ..Default::default()
            }])],
        };
        let issues = unknown_values(&vast);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].path,
            "Ad[0]/InLine/Creatives/Creative[0]/Linear/TrackingEvents/Tracking[1]"
        );
        assert!(issues[1].message.contains("download"));
    }

    #[test]
    fn ad_tag_url_parses_trimmed_uri() {
        let wrapper = Wrapper {
            vast_ad_tag_uri: "  http://ads.example.com/vast?id=7\n".to_string(),
            ..Default::default()
        };
        let url = wrapper.ad_tag_url().unwrap();
        assert_eq!(url.host_str(), Some("ads.example.com"));

        let broken = Wrapper::default();
        assert_eq!(broken.ad_tag_url().unwrap_err().kind(), ErrorKind::Url);
    }
}
