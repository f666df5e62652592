//! Embedded redirect-resource alias table.
//!
//! `types` is what a uBlock Origin rule has to declare when the source rule
//! names no content type. Resources usable with any request kind carry none.

use crate::registry::{ContentTypes, StaticRecord};

pub(crate) static REDIRECTS: &[StaticRecord] = &[
    resource!(
        "1x1-transparent.gif",
        ubo: ["1x1.gif", "1x1-transparent.gif"],
        abp: ["abp-resource:1x1-transparent-gif"],
        types: ContentTypes::IMAGE,
    ),
    resource!(
        "2x2-transparent.png",
        ubo: ["2x2.png", "2x2-transparent.png"],
        abp: ["abp-resource:2x2-transparent-png"],
        types: ContentTypes::IMAGE,
    ),
    resource!(
        "3x2-transparent.png",
        ubo: ["3x2.png", "3x2-transparent.png"],
        abp: ["abp-resource:3x2-transparent-png"],
        types: ContentTypes::IMAGE,
    ),
    resource!(
        "32x32-transparent.png",
        ubo: ["32x32.png", "32x32-transparent.png"],
        abp: ["abp-resource:32x32-transparent-png"],
        types: ContentTypes::IMAGE,
    ),
    resource!("amazon-apstag", ubo: ["amazon_apstag.js"], types: ContentTypes::SCRIPT),
    resource!("ampproject-v0", ubo: ["ampproject_v0.js"], types: ContentTypes::SCRIPT),
    resource!("ati-smarttag", types: ContentTypes::SCRIPT),
    resource!("click2load.html", ubo: ["click2load.html"], types: ContentTypes::SUBDOCUMENT),
    resource!("didomi-loader", types: ContentTypes::SCRIPT),
    resource!("empty", ubo: ["empty"]),
    resource!("fingerprintjs2", ubo: ["fingerprint2.js"], types: ContentTypes::SCRIPT),
    resource!("fingerprintjs3", ubo: ["fingerprint3.js"], types: ContentTypes::SCRIPT),
    resource!("gemius", types: ContentTypes::SCRIPT),
    resource!(
        "google-analytics",
        ubo: ["google-analytics_analytics.js", "googletagmanager_gtm.js"],
        types: ContentTypes::SCRIPT,
    ),
    resource!("google-analytics-ga", ubo: ["google-analytics_ga.js"], types: ContentTypes::SCRIPT),
    resource!("google-ima3", ubo: ["google-ima.js"], types: ContentTypes::SCRIPT),
    resource!(
        "googlesyndication-adsbygoogle",
        ubo: ["googlesyndication_adsbygoogle.js"],
        types: ContentTypes::SCRIPT,
    ),
    resource!("googletagservices-gpt", ubo: ["googletagservices_gpt.js"], types: ContentTypes::SCRIPT),
    resource!("matomo", types: ContentTypes::SCRIPT),
    resource!("metrika-yandex-tag", types: ContentTypes::SCRIPT),
    resource!("metrika-yandex-watch", types: ContentTypes::SCRIPT),
    resource!("naver-wcslog", types: ContentTypes::SCRIPT),
    resource!("noeval", ubo: ["noeval-silent.js", "silent-noeval.js"], types: ContentTypes::SCRIPT),
    resource!("noopcss", ubo: ["noop.css"], abp: ["abp-resource:blank-css"], types: ContentTypes::STYLESHEET),
    resource!(
        "noopframe",
        ubo: ["noop.html", "noopframe"],
        abp: ["abp-resource:blank-html"],
        types: ContentTypes::SUBDOCUMENT,
    ),
    resource!("noopjs", ubo: ["noop.js", "noopjs"], abp: ["abp-resource:blank-js"], types: ContentTypes::SCRIPT),
    resource!("noopjson", ubo: ["noop.json"], types: ContentTypes::XMLHTTPREQUEST),
    resource!(
        "noopmp3-0.1s",
        ubo: ["noop-0.1s.mp3", "noopmp3-0.1s"],
        abp: ["abp-resource:blank-mp3"],
        types: ContentTypes::MEDIA,
    ),
    resource!("noopmp4-1s", ubo: ["noop-1s.mp4", "noopmp4-1s"], types: ContentTypes::MEDIA),
    resource!("nooptext", ubo: ["noop.txt", "nooptext"], abp: ["abp-resource:blank-text"]),
    resource!("noopvast-2.0", types: ContentTypes::XMLHTTPREQUEST),
    resource!("noopvast-3.0", types: ContentTypes::XMLHTTPREQUEST),
    resource!("noopvmap-1.0", ubo: ["noop-vmap1.xml"], types: ContentTypes::XMLHTTPREQUEST),
    resource!("pardot-1.0", types: ContentTypes::SCRIPT),
    resource!("prebid", types: ContentTypes::SCRIPT),
    resource!("prevent-bab", ubo: ["nobab.js"], types: ContentTypes::SCRIPT),
    resource!("prevent-bab2", ubo: ["nobab2.js"], types: ContentTypes::SCRIPT),
    resource!("prevent-fab-3.2.0", ubo: ["nofab.js", "fuckadblock.js-3.2.0"], types: ContentTypes::SCRIPT),
    resource!("prevent-popads-net", ubo: ["popads.js", "popads.net.js"], types: ContentTypes::SCRIPT),
    resource!("scorecardresearch-beacon", ubo: ["scorecardresearch_beacon.js"], types: ContentTypes::SCRIPT),
    resource!("set-popads-dummy", ubo: ["popads-dummy.js"], types: ContentTypes::SCRIPT),
];
