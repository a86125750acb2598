use pretty_assertions::assert_eq;
use vast2::models::*;
use vast2::{
    from_slice, from_str, from_str_with, parse_vast, to_string, DecodeOptions, Delivery,
    ErrorKind, TrackingEvent, VastError,
};

fn inline_fixture() -> Vast {
    let xml = include_str!("fixtures/inline.xml");
    parse_vast(xml).expect("Failed to parse inline fixture")
}

fn wrapper_fixture() -> Vast {
    let xml = include_str!("fixtures/wrapper.xml");
    parse_vast(xml).expect("Failed to parse wrapper fixture")
}

#[test]
fn test_parse_inline_header() {
    let vast = inline_fixture();
    assert_eq!(vast.version, "2.0");
    assert_eq!(vast.ads.len(), 1);

    let ad = &vast.ads[0];
    assert_eq!(ad.id, "601364");
    assert!(ad.wrapper.is_none());

    let inline = ad.inline.as_ref().expect("Should have an InLine");
    assert_eq!(inline.ad_title, "VAST 2.0 Instream Test 1");
    assert_eq!(inline.description, "VAST 2.0 Instream Test 1");
    assert_eq!(inline.survey, "");
    assert_eq!(inline.error, "http://myErrorURL/error");
    assert_eq!(inline.ad_system.version, "1.0");
    assert_eq!(inline.ad_system.name, "Acudeo Compatible");
}

#[test]
fn test_parse_inline_impressions_in_order() {
    let vast = inline_fixture();
    let inline = vast.ads[0].inline.as_ref().unwrap();
    assert_eq!(
        inline.impressions,
        vec![
            Impression {
                id: "primary".to_string(),
                url: "http://myTrackingURL/impression".to_string(),
            },
            Impression::new("http://myTrackingURL/impression2"),
        ]
    );
}

#[test]
fn test_parse_linear_creative() {
    let vast = inline_fixture();
    let creatives = &vast.ads[0].inline.as_ref().unwrap().creatives.creatives;
    assert_eq!(creatives.len(), 3);

    let creative = &creatives[0];
    assert_eq!(creative.ad_id, "601364");
    assert_eq!(creative.sequence, 1);
    assert_eq!(creative.id, "");

    let linear = creative.linear.as_ref().expect("Should have a Linear");
    assert_eq!(linear.duration, "00:00:30");
    assert_eq!(linear.ad_parameters, "");

    let events: Vec<&TrackingEvent> = linear
        .tracking_events
        .as_ref()
        .unwrap()
        .tracking
        .iter()
        .map(|t| &t.event)
        .collect();
    assert_eq!(
        events,
        vec![
            &TrackingEvent::CreativeView,
            &TrackingEvent::Start,
            &TrackingEvent::Midpoint,
            &TrackingEvent::FirstQuartile,
            &TrackingEvent::ThirdQuartile,
            &TrackingEvent::Complete,
        ]
    );

    let clicks = linear.video_clicks.as_ref().unwrap();
    assert_eq!(clicks.click_through, "http://www.tremormedia.com");
    assert_eq!(clicks.click_tracking, "http://myTrackingURL/click");
    assert_eq!(
        clicks.custom_click,
        Some(CustomClick {
            id: "menu".to_string(),
            url: "http://myTrackingURL/menu".to_string(),
        })
    );
}

#[test]
fn test_parse_media_files() {
    let vast = inline_fixture();
    let linear = vast.ads[0].inline.as_ref().unwrap().creatives.creatives[0]
        .linear
        .as_ref()
        .unwrap();
    let files = &linear.media_files.media_files;
    assert_eq!(files.len(), 2);

    assert_eq!(
        files[0],
        MediaFile {
            id: String::new(),
            delivery: Delivery::Progressive,
            mime_type: "video/x-flv".to_string(),
            bitrate: 500,
            width: 400,
            height: 300,
            scalable: true,
            maintain_aspect_ratio: true,
            api_framework: String::new(),
            url: "http://cdnp.tremormedia.com/video/acudeo/Carrot_400x300_500kb.flv".to_string(),
        }
    );
    assert_eq!(files[1].id, "hd");
    assert_eq!(files[1].delivery, Delivery::Streaming);
    assert_eq!(files[1].bitrate, 0);
    assert!(!files[1].scalable);
}

#[test]
fn test_parse_companion_ads() {
    let vast = inline_fixture();
    let creative = &vast.ads[0].inline.as_ref().unwrap().creatives.creatives[1];
    assert!(creative.linear.is_none());

    let companions = &creative.companion_ads.as_ref().unwrap().companions;
    assert_eq!(companions.len(), 2);

    let first = &companions[0];
    assert_eq!((first.width, first.height), (300, 250));
    assert_eq!(
        first.static_resource,
        Some(StaticResource::new(
            "image/jpeg",
            "http://demo.tremormedia.com/proddev/vast/Blistex1.jpg"
        ))
    );
    assert_eq!(first.companion_click_through, "http://www.tremormedia.com");
    assert_eq!(first.tracking_events.as_ref().unwrap().tracking.len(), 1);

    let second = &companions[1];
    assert_eq!((second.expanded_width, second.expanded_height), (728, 180));
    assert_eq!(
        second.html_resource,
        r#"<a href="http://www.tremormedia.com">banner</a>"#
    );
    assert!(second.static_resource.is_none());
}

#[test]
fn test_parse_non_linear_ads() {
    let vast = inline_fixture();
    let creative = &vast.ads[0].inline.as_ref().unwrap().creatives.creatives[2];
    let ads = creative.non_linear_ads.as_ref().unwrap();

    assert_eq!(ads.non_linears.len(), 1);
    let overlay = &ads.non_linears[0];
    assert_eq!(overlay.id, "overlay");
    assert!(overlay.scalable);
    assert!(!overlay.maintain_aspect_ratio);
    assert_eq!(overlay.api_framework, "VPAID");
    assert_eq!(overlay.non_linear_click_through, "http://www.example.com/landing");

    let events = &ads.tracking_events.as_ref().unwrap().tracking;
    assert_eq!(events[0], Tracking::new(TrackingEvent::Collapse, "http://myTrackingURL/collapse"));
    assert_eq!(events[1].event, TrackingEvent::Close);
}

#[test]
fn test_parse_extension_keeps_inner_markup() {
    let vast = inline_fixture();
    let extensions = vast.ads[0].inline.as_ref().unwrap().extensions.as_ref().unwrap();
    assert_eq!(
        extensions.extensions,
        vec![Extension::new("price", r#"<Price currency="USD">2.5</Price>"#)]
    );
}

#[test]
fn test_parse_wrapper() {
    let vast = wrapper_fixture();
    let ad = &vast.ads[0];
    assert!(ad.inline.is_none());

    let wrapper = ad.wrapper.as_ref().expect("Should have a Wrapper");
    assert_eq!(
        wrapper.vast_ad_tag_uri,
        "http://demo.tremormedia.com/proddev/vast/vast_inline_linear.xml"
    );
    assert_eq!(wrapper.error, "http://myErrorURL/wrapper/error");
    assert_eq!(wrapper.ad_system, AdSystem::new("Acudeo Compatible"));
    assert_eq!(wrapper.impressions.len(), 1);
    assert!(wrapper.extensions.is_none());

    let url = wrapper.ad_tag_url().unwrap();
    assert_eq!(url.path(), "/proddev/vast/vast_inline_linear.xml");
}

#[test]
fn test_parse_wrapper_passes_through_unknown_event() {
    let vast = wrapper_fixture();
    let linear = vast.ads[0].wrapper.as_ref().unwrap().creatives.creatives[0]
        .linear
        .as_ref()
        .unwrap();

    // Duration is missing from wrapper linears
    assert_eq!(linear.duration, "");

    let events = &linear.tracking_events.as_ref().unwrap().tracking;
    assert_eq!(events[0].event, TrackingEvent::AcceptInvitation);
    assert_eq!(events[1].event, TrackingEvent::Other("skip".to_string()));
}

#[test]
fn test_repeated_impressions_round_trip() {
    let inline = InLine {
        impressions: vec![Impression::new("http://a"), Impression::new("http://b")],
        ..Default::default()
    };
    let xml = to_string(&inline).unwrap();
    assert_eq!(
        xml,
        "<InLine><AdTitle></AdTitle><AdSystem></AdSystem><Impression>http://a</Impression><Impression>http://b</Impression><Creatives></Creatives></InLine>"
    );

    let decoded: InLine = from_str(&xml).unwrap();
    assert_eq!(decoded.impressions.len(), 2);
    assert_eq!(decoded, inline);
}

#[test]
fn test_default_document_round_trips() {
    let vast = Vast::default();
    let decoded: Vast = from_str(&to_string(&vast).unwrap()).unwrap();
    assert_eq!(decoded, vast);
}

#[test]
fn test_full_document_round_trips() {
    let vast = inline_fixture();
    let xml = to_string(&vast).unwrap();
    let decoded = parse_vast(&xml).unwrap();
    assert_eq!(decoded, vast);
}

#[test]
fn test_mixed_ad_round_trips() {
    let ad = Ad {
        id: "both".to_string(),
        inline: Some(InLine {
            ad_title: "title".to_string(),
            extensions: Some(Extensions {
                extensions: vec![Extension::new("", "<A><B/></A>"), Extension::default()],
            }),
            ..Default::default()
        }),
        wrapper: Some(Wrapper {
            vast_ad_tag_uri: "http://tag".to_string(),
            creatives: Creatives {
                creatives: vec![Creative {
                    sequence: 3,
                    non_linear_ads: Some(NonLinearAds {
                        non_linears: vec![NonLinear {
                            width: 10,
                            height: 20,
                            scalable: true,
                            static_resource: Some(StaticResource::new("image/gif", "http://x.gif")),
                            ..Default::default()
                        }],
                        tracking_events: None,
                    }),
                    ..Default::default()
                }],
            },
            ..Default::default()
        }),
    };
    let decoded: Ad = from_str(&to_string(&ad).unwrap()).unwrap();
    assert_eq!(decoded, ad);
}

#[test]
fn test_escaped_text_is_unescaped() {
    let companion = Companion {
        html_resource: "<body></body>".to_string(),
        ..Default::default()
    };
    let xml = to_string(&companion).unwrap();
    let decoded: Companion = from_str(&xml).unwrap();
    assert_eq!(decoded.html_resource, "<body></body>");
}

#[test]
fn test_unknown_elements_and_attributes_are_ignored() {
    let xml = concat!(
        r#"<VAST version="2.0" extra="1">"#,
        "<Unknown><Ad id=\"nested\"></Ad></Unknown>",
        r#"<Ad id="1" sequence="4">"#,
        "<InLine><AdTitle>t</AdTitle><Advertiser>Acme</Advertiser><Pricing model=\"CPM\">1</Pricing></InLine>",
        "</Ad>",
        "</VAST>",
    );
    let vast: Vast = from_str(xml).unwrap();
    assert_eq!(vast.ads.len(), 1);
    assert_eq!(vast.ads[0].id, "1");
    assert_eq!(vast.ads[0].inline.as_ref().unwrap().ad_title, "t");
}

#[test]
fn test_self_closing_elements_decode_as_empty() {
    let xml = r#"<VAST version="2.0"><Ad id="1"><InLine><AdTitle/><AdSystem version="3"/><Extensions><Extension type="x"/></Extensions></InLine></Ad></VAST>"#;
    let vast = parse_vast(xml).unwrap();
    let inline = vast.ads[0].inline.as_ref().unwrap();
    assert_eq!(inline.ad_title, "");
    assert_eq!(inline.ad_system.version, "3");
    assert_eq!(
        inline.extensions.as_ref().unwrap().extensions,
        vec![Extension::new("x", "")]
    );
}

#[test]
fn test_blank_numeric_attributes_decode_as_zero() {
    let file: MediaFile =
        from_str(r#"<MediaFile delivery="" type="" width="" height=" 250 "></MediaFile>"#).unwrap();
    assert_eq!(file.width, 0);
    assert_eq!(file.height, 250);
    assert_eq!(file, MediaFile { height: 250, ..Default::default() });
}

#[test]
fn test_text_whitespace_is_kept_unless_trimmed() {
    let xml = "<Impression>\n  <![CDATA[http://imp]]>\n</Impression>";

    let exact: Impression = from_str(xml).unwrap();
    assert_eq!(exact.url, "\n  http://imp\n");

    let trimmed: Impression = from_str_with(xml, &DecodeOptions::trimmed()).unwrap();
    assert_eq!(trimmed.url, "http://imp");
}

#[test]
fn test_from_slice_accepts_bom() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(br#"<VAST version="2.0"></VAST>"#);
    let vast: Vast = from_slice(&bytes).unwrap();
    assert_eq!(vast.version, "2.0");
}

#[test]
fn test_non_numeric_width_fails_conversion() {
    let err = from_str::<MediaFile>(r#"<MediaFile width="wide" height="1"></MediaFile>"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeConversion);
    assert!(matches!(
        err,
        VastError::TypeConversionError { element: "MediaFile", field: "width", .. }
    ));
}

#[test]
fn test_invalid_boolean_fails_conversion() {
    let err =
        from_str::<NonLinear>(r#"<NonLinear width="1" height="1" scalable="maybe"></NonLinear>"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeConversion);
    assert!(err.to_string().contains("scalable"));
}

#[test]
fn test_boolean_spellings_decode() {
    for (raw, expected) in [("True", true), ("TRUE", true), ("t", true), ("F", false), ("False", false)] {
        let xml = format!(r#"<MediaFile delivery="" type="" width="1" height="1" scalable="{raw}"></MediaFile>"#);
        let file: MediaFile = from_str(&xml).unwrap();
        assert_eq!(file.scalable, expected, "scalable={raw}");
    }

    let err = from_str::<MediaFile>(r#"<MediaFile width="1" height="1" scalable="yes"></MediaFile>"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeConversion);
}

#[test]
fn test_negative_numbers_decode() {
    let file: MediaFile =
        from_str(r#"<MediaFile delivery="" type="" width="-1" height="5000000000"></MediaFile>"#).unwrap();
    assert_eq!(file.width, -1);
    assert_eq!(file.height, 5_000_000_000);

    let vast = parse_vast(
        r#"<VAST version="2.0"><Ad><InLine><Creatives><Creative sequence="-2"></Creative></Creatives></InLine></Ad></VAST>"#,
    )
    .unwrap();
    let inline = vast.ads[0].inline.as_ref().unwrap();
    assert_eq!(inline.creatives.creatives[0].sequence, -2);
}

#[test]
fn test_invalid_sequence_fails_conversion() {
    let err = parse_vast(
        r#"<VAST version="2.0"><Ad><InLine><Creatives><Creative sequence="first"></Creative></Creatives></InLine></Ad></VAST>"#,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeConversion);
}

#[test]
fn test_truncated_document_fails() {
    let err = parse_vast(r#"<VAST version="2.0"><Ad id="1"><InLine>"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_mismatched_end_tag_fails() {
    let err = parse_vast(r#"<VAST version="2.0"><Ad id="1"></InLine></VAST>"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_unterminated_tag_fails() {
    let err = parse_vast(r#"<VAST version="2.0""#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_wrong_root_fails() {
    let err = parse_vast("<Ad id=\"1\"></Ad>").unwrap_err();
    assert!(matches!(err, VastError::UnexpectedRoot { expected: "VAST", .. }));

    let err = parse_vast("").unwrap_err();
    assert!(matches!(err, VastError::MissingRoot("VAST")));
}

#[test]
fn test_invalid_utf8_fails() {
    let err = from_slice::<Vast>(b"<VAST version=\"\xFF\"></VAST>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}
