//! Embedded scriptlet alias table.
//!
//! Names are AdGuard canonical names; `ubo` and `abp` list the spellings the
//! other dialects accept, preferred spelling first.

use crate::registry::StaticRecord;

pub(crate) static SCRIPTLETS: &[StaticRecord] = &[
    resource!(
        "abort-current-inline-script",
        ubo: ["abort-current-inline-script.js", "acis.js", "abort-current-script.js", "acs.js"],
        abp: ["abort-current-inline-script"],
    ),
    resource!("abort-on-property-read", ubo: ["abort-on-property-read.js", "aopr.js"], abp: ["abort-on-property-read"]),
    resource!(
        "abort-on-property-write",
        ubo: ["abort-on-property-write.js", "aopw.js"],
        abp: ["abort-on-property-write"],
    ),
    resource!("abort-on-stack-trace", ubo: ["abort-on-stack-trace.js", "aost.js"]),
    resource!("adjust-setInterval", ubo: ["nano-setInterval-booster.js", "nano-sib.js", "adjust-setInterval.js"]),
    resource!("adjust-setTimeout", ubo: ["nano-setTimeout-booster.js", "nano-stb.js", "adjust-setTimeout.js"]),
    resource!("call-nothrow", ubo: ["call-nothrow.js"]),
    resource!("close-window", ubo: ["window-close-if.js"]),
    resource!("debug-current-inline-script"),
    resource!("debug-on-property-read"),
    resource!("debug-on-property-write"),
    resource!("dir-string", abp: ["dir-string"]),
    resource!("disable-newtab-links", ubo: ["disable-newtab-links.js"]),
    resource!("evaldata-prune", ubo: ["evaldata-prune.js"]),
    resource!("hide-in-shadow-dom"),
    resource!("href-sanitizer", ubo: ["href-sanitizer.js"]),
    resource!("json-prune", ubo: ["json-prune.js"], abp: ["json-prune"]),
    resource!("json-prune-fetch-response", ubo: ["json-prune-fetch-response.js"]),
    resource!("json-prune-xhr-response", ubo: ["json-prune-xhr-response.js"]),
    resource!("log", abp: ["log"]),
    resource!("log-addEventListener", ubo: ["addEventListener-logger.js", "aell.js"]),
    resource!("log-eval"),
    resource!("log-on-stack-trace"),
    resource!("m3u-prune", ubo: ["m3u-prune.js"]),
    resource!("no-topics"),
    resource!("noeval", ubo: ["noeval.js", "silent-noeval.js", "noeval-silent.js"]),
    resource!("nowebrtc", ubo: ["nowebrtc.js"]),
    resource!(
        "prevent-addEventListener",
        ubo: ["addEventListener-defuser.js", "aeld.js", "prevent-addEventListener.js"],
    ),
    resource!("prevent-adfly", ubo: ["adfly-defuser.js"]),
    resource!("prevent-bab", ubo: ["bab-defuser.js", "nobab.js"]),
    resource!("prevent-canvas"),
    resource!("prevent-element-src-loading"),
    resource!("prevent-eval-if", ubo: ["noeval-if.js", "prevent-eval-if.js"]),
    resource!("prevent-fab-3.2.0", ubo: ["nofab.js", "fuckadblock.js-3.2.0"]),
    resource!("prevent-fetch", ubo: ["no-fetch-if.js", "prevent-fetch.js"]),
    resource!("prevent-popads-net", ubo: ["popads.net.js"]),
    resource!("prevent-refresh", ubo: ["refresh-defuser.js", "prevent-refresh.js"]),
    resource!(
        "prevent-requestAnimationFrame",
        ubo: ["no-requestAnimationFrame-if.js", "norafif.js", "prevent-requestAnimationFrame.js"],
    ),
    resource!(
        "prevent-setInterval",
        ubo: ["no-setInterval-if.js", "nosiif.js", "prevent-setInterval.js", "setInterval-defuser.js"],
    ),
    resource!(
        "prevent-setTimeout",
        ubo: ["no-setTimeout-if.js", "nostif.js", "prevent-setTimeout.js", "setTimeout-defuser.js"],
    ),
    resource!(
        "prevent-window-open",
        ubo: ["window.open-defuser.js", "nowoif.js", "no-window-open-if.js", "prevent-window-open.js"],
    ),
    resource!("prevent-xhr", ubo: ["no-xhr-if.js", "prevent-xhr.js"]),
    resource!("remove-attr", ubo: ["remove-attr.js", "ra.js"]),
    resource!("remove-class", ubo: ["remove-class.js", "rc.js"]),
    resource!("remove-cookie", ubo: ["cookie-remover.js", "remove-cookie.js"]),
    resource!("remove-in-shadow-dom"),
    resource!("remove-node-text", ubo: ["remove-node-text.js", "rmnt.js"]),
    resource!("set-attr", ubo: ["set-attr.js"]),
    resource!("set-constant", ubo: ["set-constant.js", "set.js"], abp: ["override-property-read"]),
    resource!("set-cookie", ubo: ["set-cookie.js"]),
    resource!("set-cookie-reload", ubo: ["set-cookie-reload.js"]),
    resource!("set-local-storage-item", ubo: ["set-local-storage-item.js"]),
    resource!("set-popads-dummy", ubo: ["popads-dummy.js"]),
    resource!("set-session-storage-item", ubo: ["set-session-storage-item.js"]),
    resource!("spoof-css", ubo: ["spoof-css.js"]),
    resource!("trusted-click-element"),
    resource!("trusted-replace-fetch-response"),
    resource!("trusted-replace-xhr-response"),
    resource!("trusted-set-constant"),
    resource!("trusted-set-cookie"),
    resource!("trusted-set-local-storage-item"),
    resource!("xml-prune", ubo: ["xml-prune.js"]),
];
