use super::*;

#[test]
fn builtin_tables_load() {
    let registry = Registry::builtin();
    assert!(!registry.scriptlets().is_empty());
    assert!(!registry.redirects().is_empty());
    assert_eq!(registry.table(ResourceKind::Redirect).kind(), ResourceKind::Redirect);
}

#[test]
fn every_alias_resolves_to_its_record() {
    let registry = Registry::builtin();
    for kind in [ResourceKind::Scriptlet, ResourceKind::Redirect] {
        let table = registry.table(kind);
        for record in table.iter() {
            assert_eq!(table.resolve(Dialect::Adg, &record.name), Some(record.name.as_str()));
            for dialect in Dialect::ALL {
                for alias in record.aliases(dialect) {
                    assert_eq!(table.resolve(dialect, alias), Some(record.name.as_str()), "{kind} {alias}");
                }
            }
        }
    }
}

#[test]
fn adg_accepts_prefixed_foreign_names() {
    let scriptlets = Registry::builtin().scriptlets();
    assert_eq!(scriptlets.resolve(Dialect::Adg, "ubo-set.js"), Some("set-constant"));
    assert_eq!(scriptlets.resolve(Dialect::Adg, "set.js"), Some("set-constant"));
    assert_eq!(scriptlets.resolve(Dialect::Adg, "abp-override-property-read"), Some("set-constant"));
    assert_eq!(scriptlets.resolve(Dialect::Adg, "override-property-read"), None);

    let redirects = Registry::builtin().redirects();
    assert_eq!(redirects.resolve(Dialect::Adg, "ubo-noop.js"), Some("noopjs"));
    assert_eq!(redirects.resolve(Dialect::Adg, "abp-resource:blank-js"), Some("noopjs"));
    assert_eq!(redirects.resolve(Dialect::Adg, "noop.js"), None);
}

#[test]
fn optional_suffix_is_retried() {
    let scriptlets = Registry::builtin().scriptlets();
    let hit = scriptlets.lookup(Dialect::Ubo, "aopr").unwrap();
    assert_eq!(hit.alias, "aopr.js");
    assert_eq!(hit.record.name, "abort-on-property-read");
    assert_eq!(scriptlets.resolve(Dialect::Abp, "abort-on-property-read.js"), None);

    let redirects = Registry::builtin().redirects();
    assert_eq!(redirects.resolve(Dialect::Ubo, "noop"), None);
}

#[test]
fn reverse_resolve_prefers_first_alias() {
    let scriptlets = Registry::builtin().scriptlets();
    assert_eq!(scriptlets.reverse_resolve("set-constant", Dialect::Adg), Some("set-constant"));
    assert_eq!(scriptlets.reverse_resolve("set-constant", Dialect::Ubo), Some("set-constant.js"));
    assert_eq!(scriptlets.reverse_resolve("set-constant", Dialect::Abp), Some("override-property-read"));
    assert_eq!(scriptlets.reverse_resolve("prevent-fetch", Dialect::Abp), None);
    assert_eq!(scriptlets.reverse_resolve("no-such-thing", Dialect::Adg), None);

    assert!(scriptlets.is_compatible("aopr", Dialect::Ubo, Dialect::Abp));
    assert!(!scriptlets.is_compatible("log", Dialect::Abp, Dialect::Ubo));
}

#[test]
fn content_types_only_for_registered_redirects() {
    let registry = Registry::builtin();
    assert_eq!(registry.required_content_types("noopjs"), Some(ContentTypes::SCRIPT));
    assert_eq!(registry.required_content_types("nooptext"), None);
    assert_eq!(registry.required_content_types("set-constant"), None);
}

#[test]
fn resolve_canonical_name_falls_back_to_redirects() {
    let registry = Registry::builtin();
    assert_eq!(registry.resolve_canonical_name("set", Dialect::Ubo), Some("set-constant"));
    assert_eq!(registry.resolve_canonical_name("noop.txt", Dialect::Ubo), Some("nooptext"));
}

#[test]
fn duplicate_alias_is_rejected() {
    let err = AliasTable::new(
        ResourceKind::Scriptlet,
        [ResourceRecord::new("one").with_ubo(["same.js"]), ResourceRecord::new("two").with_ubo(["same.js"])],
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateAlias {
            dialect: Dialect::Ubo,
            alias: "same.js".to_string(),
            first: "one".to_string(),
            second: "two".to_string(),
        }
    );
}

#[test]
fn record_may_repeat_its_own_alias() {
    let table = AliasTable::new(ResourceKind::Scriptlet, [ResourceRecord::new("one").with_ubo(["one.js", "one.js"])]);
    assert_eq!(table.unwrap().len(), 1);
}
