//! Validation integration tests
//!
//! Importer workflow: build under the lenient policy, then validate.

mod common;

use common::*;
use cwm_model::config::ConfigError;
use cwm_model::packages::{
    BehavioralPackage, CorePackage, DataTypesPackage, InstancePackage, KeyIndexesPackage,
    RelationalPackage, RelationshipsPackage, SoftwareDeploymentPackage, StandardBehavioralPackage,
    StandardCorePackage, StandardDataTypesPackage, StandardInstancePackage,
    StandardKeyIndexesPackage, StandardRelationalPackage, StandardRelationshipsPackage, StandardSoftwareDeploymentPackage,
    StandardTypeMappingPackage, TypeMappingPackage,
};
use cwm_model::shared::models::{ClassRef, ModelElementRef, NullableType, ParameterDirectionKind};
use cwm_model::{CwmConstraint, Locale, ModelConfig, ModelGraph, ModelValidator, Preset};
use pretty_assertions::assert_eq;

fn lenient_validator() -> ModelValidator {
    ModelValidator::new(&ModelConfig::preset(Preset::Lenient))
}

#[test]
fn test_lenient_import_reports_eager_constraints() {
    let mut w = WarehouseBuilder::new().tables(2).lenient().build();
    let t0 = w.tables[0].clone();
    let rel = StandardRelationalPackage;
    let g = &mut w.graph;

    let second_pk = rel.create_primary_key(g, "t0_pk2").unwrap();
    g.add_owned_element(t0.table, second_pk).unwrap();
    g.add_key_feature(second_pk, t0.columns[0]).unwrap();
    let dup = rel.create_column(g, "c1").unwrap();
    g.add_feature(t0.table, dup).unwrap();
    g.set_precision(dup, Some(4)).unwrap();
    g.set_scale(dup, Some(6)).unwrap();

    let report = lenient_validator().validate(g).unwrap();
    assert_violations(&report, CwmConstraint::MultiplePrimaryKeys, 1);
    assert_violations(&report, CwmConstraint::DuplicateFeatureName, 1);
    assert_violations(&report, CwmConstraint::ScaleExceedsPrecision, 1);
    assert_eq!(report.len(), 3);
    assert_eq!(report.violations_of(t0.table).len(), 2);
}

#[test]
fn test_foreign_key_width_must_match() {
    let mut w = WarehouseBuilder::new().tables(2).build();
    let t1 = w.tables[1].clone();
    let fk = t1.foreign_key.unwrap();
    w.graph.add_relationship_feature(fk, t1.columns[2]).unwrap();

    let report = ModelValidator::default().validate(&w.graph).unwrap();
    assert_violations(&report, CwmConstraint::KeyFeatureCountMismatch, 1);
    let violation = &report.violations[0];
    assert_eq!(violation.element, fk.element_id());
    assert_eq!(violation.code, "Foundation C-5-2");
}

#[test]
fn test_nullable_primary_key_column() {
    let mut w = WarehouseBuilder::new().tables(1).build();
    let t0 = w.tables[0].clone();
    w.graph
        .set_column_nullability(t0.columns[0], NullableType::ColumnNullableUnknown)
        .unwrap();
    let report = ModelValidator::default().validate(&w.graph).unwrap();
    assert_violations(&report, CwmConstraint::NullablePrimaryKeyColumn, 1);
    assert_eq!(
        report.violations[0].detail.as_deref(),
        Some(format!("column 'c0' {} is nullable", t0.columns[0].element_id()).as_str())
    );
}

#[test]
fn test_index_must_cover_spanned_class() {
    let mut w = WarehouseBuilder::new().tables(2).foreign_keys(false).build();
    let (t0, t1) = (w.tables[0].clone(), w.tables[1].clone());
    // index of t0 now spans t1 but its entry still points at t0.c0
    w.graph
        .set_spanned_class(t0.index, Some(t1.table.as_class()))
        .unwrap();
    let report = ModelValidator::default().validate(&w.graph).unwrap();
    assert_violations(&report, CwmConstraint::IndexedFeatureNotInSpannedClass, 1);
}

#[test]
fn test_object_model_deferred_constraints() {
    let mut g = ModelGraph::new();
    let core = StandardCorePackage;
    let behavioral = StandardBehavioralPackage;
    let instance = StandardInstancePackage;

    // method realizing an operation of another class
    let a = core.create_class(&mut g, "A").unwrap();
    let b = core.create_class(&mut g, "B").unwrap();
    let op = behavioral.create_operation(&mut g, "run").unwrap();
    g.add_feature(a, op).unwrap();
    let method = behavioral.create_method(&mut g, "run_impl", op).unwrap();
    g.add_feature(b, method).unwrap();

    // association with a single end
    let assoc = StandardRelationshipsPackage
        .create_association(&mut g, "owns")
        .unwrap();
    let end = StandardRelationshipsPackage
        .create_association_end(&mut g, "owner")
        .unwrap();
    g.add_feature(assoc, end).unwrap();

    // instance of an abstract class
    g.set_is_abstract(b, true).unwrap();
    let obj = instance.create_object(&mut g, "b1").unwrap();
    g.set_classifier(obj, Some(b.into())).unwrap();

    let ret = behavioral.create_parameter(&mut g, "result").unwrap();
    g.set_parameter_kind(ret, ParameterDirectionKind::Return).unwrap();
    g.add_parameter(op, ret).unwrap();

    let report = ModelValidator::default().validate(&g).unwrap();
    assert_violations(&report, CwmConstraint::MethodOwnerMismatch, 1);
    assert_violations(&report, CwmConstraint::AssociationEndCount, 1);
    assert_violations(&report, CwmConstraint::AbstractInstantiation, 1);
    assert_eq!(report.len(), 3, "{}", report);
}

#[test]
fn test_foundation_deferred_constraints() {
    let mut g = ModelGraph::new();
    let deploy = StandardSoftwareDeploymentPackage;
    let types = StandardDataTypesPackage;
    let mapping = StandardTypeMappingPackage;
    let core = StandardCorePackage;

    let component = deploy.create_component(&mut g, "loader").unwrap();
    let deployed = deploy
        .create_deployed_component(&mut g, "loader@etl1", component)
        .unwrap();
    let machine = deploy.create_machine(&mut g, "etl1").unwrap();

    let union = types.create_union(&mut g, "Payload").unwrap();
    let text = types.create_union_member(&mut g, "text").unwrap();
    let number = types.create_union_member(&mut g, "number").unwrap();
    g.add_feature(union, text).unwrap();
    g.add_feature(union, number).unwrap();
    let tag = core.create_attribute(&mut g, "tag").unwrap();
    g.set_discriminator(union, Some(tag.into())).unwrap();

    let system = mapping.create_type_system(&mut g, "oracle").unwrap();
    let int = core.create_data_type(&mut g, "int").unwrap();
    let number_type = core.create_data_type(&mut g, "NUMBER").unwrap();
    let decimal_type = core.create_data_type(&mut g, "DECIMAL").unwrap();
    for target in [number_type, decimal_type] {
        let name = format!("int_{}", g.name(target).unwrap().unwrap());
        let m = mapping
            .create_type_mapping(&mut g, &name, int.into(), target.into())
            .unwrap();
        g.set_is_best_match(m, true).unwrap();
        g.add_owned_element(system, m).unwrap();
    }

    let report = ModelValidator::default().validate(&g).unwrap();
    assert_violations(&report, CwmConstraint::MissingMachine, 1);
    assert_violations(&report, CwmConstraint::DiscriminatorNotMember, 1);
    assert_violations(&report, CwmConstraint::MultipleBestMatches, 1);
    assert_eq!(report.len(), 3, "{}", report);

    // fix everything and re-validate
    g.set_machine(deployed, Some(machine)).unwrap();
    g.set_discriminator(union, Some(text.into())).unwrap();
    let first = first_mapping(&g, system);
    g.set_is_best_match(first, false).unwrap();
    assert_valid(&ModelValidator::default().validate(&g).unwrap());
}

#[test]
fn test_slot_feature_must_belong_to_classifier() {
    let mut g = ModelGraph::new();
    let core = StandardCorePackage;
    let instance = StandardInstancePackage;

    // Party(name) <- Customer; Order(total) is unrelated
    let party = core.create_class(&mut g, "Party").unwrap();
    let name = core.create_attribute(&mut g, "name").unwrap();
    g.add_feature(party, name).unwrap();
    let customer = core.create_class(&mut g, "Customer").unwrap();
    StandardRelationshipsPackage
        .create_generalization(&mut g, customer.into(), party.into())
        .unwrap();
    let order = core.create_class(&mut g, "Order").unwrap();
    let total = core.create_attribute(&mut g, "total").unwrap();
    g.add_feature(order, total).unwrap();

    let alice = instance.create_object(&mut g, "alice").unwrap();
    g.set_classifier(alice, Some(customer.into())).unwrap();
    let inherited = instance.create_slot(&mut g, alice, name.into()).unwrap();
    let foreign = instance.create_slot(&mut g, alice, total.into()).unwrap();

    let report = ModelValidator::default().validate(&g).unwrap();
    assert_violations(&report, CwmConstraint::SlotFeatureNotInClassifier, 1);
    assert_eq!(report.len(), 1, "{}", report);
    assert_eq!(report.violations[0].element, foreign.element_id());
    assert_eq!(report.violations[0].code, "Instance C-6-1");
    assert!(report.violations_of(inherited).is_empty());

    // pointing the slot at an inherited feature fixes it
    g.set_slot_feature(foreign, Some(name.into())).unwrap();
    assert_valid(&ModelValidator::default().validate(&g).unwrap());
}

#[test]
fn test_unique_key_features_share_one_owner() {
    let mut w = WarehouseBuilder::new().tables(2).foreign_keys(false).build();
    let (t0, t1) = (w.tables[0].clone(), w.tables[1].clone());
    let keys = StandardKeyIndexesPackage;
    let g = &mut w.graph;

    let local = keys.create_unique_key(g, "t0_natural").unwrap();
    g.add_key_feature(local, t0.columns[0]).unwrap();
    g.add_key_feature(local, t0.columns[1]).unwrap();
    let spanning = keys.create_unique_key(g, "t0_t1").unwrap();
    g.add_key_feature(spanning, t0.columns[0]).unwrap();
    g.add_key_feature(spanning, t1.columns[0]).unwrap();

    let report = ModelValidator::default().validate(g).unwrap();
    assert_violations(&report, CwmConstraint::UniqueKeyFeatureOwner, 1);
    let violation = &report.violations[0];
    assert_eq!(violation.element, spanning.element_id());
    assert_eq!(violation.detail.as_deref(), Some("features span 2 owners"));
    assert!(report.violations_of(local).is_empty());
}

#[test]
fn test_provider_connection_needs_distinct_ends() {
    let mut g = ModelGraph::new();
    let deploy = StandardSoftwareDeploymentPackage;

    let machine = deploy.create_machine(&mut g, "db1").unwrap();
    let provider = deploy.create_data_provider(&mut g, "jdbc").unwrap();
    let manager = deploy.create_data_manager(&mut g, "etl").unwrap();
    g.set_machine(provider, Some(machine)).unwrap();
    g.set_machine(manager, Some(machine)).unwrap();

    let sound = deploy
        .create_provider_connection(&mut g, "sound", provider, manager)
        .unwrap();
    let orphan = deploy
        .create_provider_connection(&mut g, "orphan", provider, manager)
        .unwrap();
    g.set_data_manager(orphan, None).unwrap();
    let looped = deploy
        .create_provider_connection(&mut g, "looped", provider, manager)
        .unwrap();
    g.set_data_manager(looped, Some(provider.into())).unwrap();

    let report = ModelValidator::default().validate(&g).unwrap();
    assert_violations(&report, CwmConstraint::ProviderConnectionEnds, 2);
    assert_eq!(report.len(), 2, "{}", report);
    assert!(report.violations_of(sound).is_empty());
    assert_eq!(
        report.violations_of(orphan)[0].detail.as_deref(),
        Some("no data manager")
    );
    assert_eq!(
        report.violations_of(looped)[0].detail.as_deref(),
        Some("provider is its own manager")
    );
}

fn first_mapping(
    g: &ModelGraph,
    system: cwm_model::shared::models::TypeSystemId,
) -> cwm_model::shared::models::TypeMappingId {
    let owned = g.owned_elements(system).unwrap();
    g.downcast(owned[0]).unwrap()
}

#[test]
fn test_config_file_drives_validator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("import.yaml");
    std::fs::write(
        &path,
        "version: 1\n\
         preset: lenient\n\
         locale: de\n\
         validation:\n  \
           max_violations: 2\n  \
           skip_constraints: [DependencyEnds]\n",
    )
    .unwrap();
    let config = ModelConfig::from_yaml(&path).unwrap();
    assert_eq!(config.locale, Locale::De);

    let mut g = ModelGraph::with_policy(config.policy);
    let core = StandardCorePackage;
    let package = core.create_package(&mut g, "p").unwrap();
    for _ in 0..3 {
        core.create_dependency(&mut g, "d").unwrap();
        let c = core.create_class(&mut g, "Same").unwrap();
        g.add_owned_element(package, c).unwrap();
        let e = core.create_constraint(&mut g, "self").unwrap();
        g.add_constrained_element(e, e).unwrap();
    }

    let report = ModelValidator::new(&config).validate(&g).unwrap();
    assert!(!report.has(CwmConstraint::DependencyEnds));
    assert_eq!(report.len(), 2);
    assert!(report.truncated);
    assert!(report.violations.iter().all(|v| !v.message.is_empty()));
    assert_eq!(
        report.violations[0].message,
        CwmConstraint::DuplicateOwnedName.message(Locale::De)
    );
}

#[test]
fn test_bad_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "version: 1\npreset: lenient\nvalidation:\n  max_violations: 0\n  fail_first: true\n").unwrap();
    assert!(matches!(ModelConfig::from_yaml(&path), Err(ConfigError::Yaml(_))));
}

#[test]
fn test_violation_converts_to_error() {
    let mut g = ModelGraph::new();
    let dependency = StandardCorePackage.create_dependency(&mut g, "d").unwrap();
    let report = ModelValidator::default().validate(&g).unwrap();
    let err = report.clone().into_result().unwrap_err();
    assert_eq!(err.violated_constraint(), Some(CwmConstraint::DependencyEnds));
    assert_eq!(report.violations[0].to_error().to_string(), err.to_string());
    assert_eq!(report.violations_of(dependency).len(), 1);
}
