//! OCL-derived constraint taxonomy
//!
//! Each [`CwmConstraint`] names one OMG well-formedness rule of the
//! metamodel. Violations are raised as
//! [`CwmError::Constraint`](crate::errors::CwmError::Constraint) by setters
//! (eager checks) and reported by the model validator.
//!
//! Messages come from a static lookup table per [`Locale`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::meta_class::CwmPackage;

/// Language of constraint messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "en" | "en_us" | "en-us" | "english" => Ok(Self::En),
            "de" | "de_de" | "de-de" | "german" | "deutsch" => Ok(Self::De),
            _ => Err(format!("Unknown locale '{}'. Valid locales: en, de", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When a constraint is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    /// Structural invariant, checked by every mutation regardless of policy
    Always,
    /// Checked by mutations when the policy is eager, and by the validator
    Eager,
    /// Depends on multi-step construction; validator only
    Deferred,
}

/// Which constraints mutations check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintPolicy {
    pub eager: bool,
}

impl ConstraintPolicy {
    pub fn strict() -> Self {
        Self { eager: true }
    }

    pub fn lenient() -> Self {
        Self { eager: false }
    }

    /// Whether a mutation must check `constraint` under this policy
    pub fn applies(&self, constraint: CwmConstraint) -> bool {
        match constraint.enforcement() {
            Enforcement::Always => true,
            Enforcement::Eager => self.eager,
            Enforcement::Deferred => false,
        }
    }
}

impl Default for ConstraintPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CwmConstraint {
    // ObjectModel::Core
    DuplicateOwnedName,
    OwnershipCycle,
    SingleCompositeOwner,
    SelfConstraint,
    DuplicateFeatureName,
    InvalidMultiplicityRange,
    StereotypeBaseClass,
    DependencyEnds,

    // ObjectModel::Behavioral
    DuplicateParameterName,
    MultipleReturnParameters,
    MethodOwnerMismatch,

    // ObjectModel::Relationships
    AssociationEndCount,
    MultipleAggregateEnds,
    AssociationEndOwner,
    GeneralizationCycle,

    // ObjectModel::Instance
    SlotFeatureNotInClassifier,
    DataValueClassifier,
    ObjectClassifier,
    AbstractInstantiation,

    // Foundation::KeyIndexes
    AscendingRequiresSorted,
    KeyFeatureCountMismatch,
    IndexedFeatureNotInSpannedClass,
    UniqueKeyFeatureOwner,

    // Foundation::SoftwareDeployment
    MissingMachine,
    ProviderConnectionEnds,

    // Foundation::DataTypes
    DuplicateLiteralName,
    MultipleDefaultMembers,
    DiscriminatorNotMember,
    TypeAliasSelf,

    // Foundation::TypeMapping
    MappingSourceEqualsTarget,
    MultipleBestMatches,

    // Resource::Relational
    MultiplePrimaryKeys,
    NullablePrimaryKeyColumn,
    ScaleExceedsPrecision,
}

use CwmConstraint::*;

impl CwmConstraint {
    pub const ALL: &'static [CwmConstraint] = &[
        DuplicateOwnedName,
        OwnershipCycle,
        SingleCompositeOwner,
        SelfConstraint,
        DuplicateFeatureName,
        InvalidMultiplicityRange,
        StereotypeBaseClass,
        DependencyEnds,
        DuplicateParameterName,
        MultipleReturnParameters,
        MethodOwnerMismatch,
        AssociationEndCount,
        MultipleAggregateEnds,
        AssociationEndOwner,
        GeneralizationCycle,
        SlotFeatureNotInClassifier,
        DataValueClassifier,
        ObjectClassifier,
        AbstractInstantiation,
        AscendingRequiresSorted,
        KeyFeatureCountMismatch,
        IndexedFeatureNotInSpannedClass,
        UniqueKeyFeatureOwner,
        MissingMachine,
        ProviderConnectionEnds,
        DuplicateLiteralName,
        MultipleDefaultMembers,
        DiscriminatorNotMember,
        TypeAliasSelf,
        MappingSourceEqualsTarget,
        MultipleBestMatches,
        MultiplePrimaryKeys,
        NullablePrimaryKeyColumn,
        ScaleExceedsPrecision,
    ];

    /// OMG-style identifier, e.g. `Foundation C-8-1`
    pub fn code(self) -> &'static str {
        match self {
            DuplicateOwnedName => "Core C-3-1",
            OwnershipCycle => "Core C-3-2",
            SingleCompositeOwner => "Core C-3-3",
            SelfConstraint => "Core C-3-4",
            DuplicateFeatureName => "Core C-3-5",
            InvalidMultiplicityRange => "Core C-3-6",
            StereotypeBaseClass => "Core C-3-7",
            DependencyEnds => "Core C-3-8",
            DuplicateParameterName => "Behavioral C-4-1",
            MultipleReturnParameters => "Behavioral C-4-2",
            MethodOwnerMismatch => "Behavioral C-4-3",
            AssociationEndCount => "Relationships C-5-1",
            MultipleAggregateEnds => "Relationships C-5-2",
            AssociationEndOwner => "Relationships C-5-3",
            GeneralizationCycle => "Relationships C-5-4",
            SlotFeatureNotInClassifier => "Instance C-6-1",
            DataValueClassifier => "Instance C-6-2",
            ObjectClassifier => "Instance C-6-3",
            AbstractInstantiation => "Instance C-6-4",
            AscendingRequiresSorted => "Foundation C-5-1",
            KeyFeatureCountMismatch => "Foundation C-5-2",
            IndexedFeatureNotInSpannedClass => "Foundation C-5-3",
            UniqueKeyFeatureOwner => "Foundation C-5-4",
            MissingMachine => "Foundation C-6-1",
            ProviderConnectionEnds => "Foundation C-6-2",
            DuplicateLiteralName => "Foundation C-3-1",
            MultipleDefaultMembers => "Foundation C-3-2",
            DiscriminatorNotMember => "Foundation C-3-3",
            TypeAliasSelf => "Foundation C-3-4",
            MappingSourceEqualsTarget => "Foundation C-8-1",
            MultipleBestMatches => "Foundation C-8-2",
            MultiplePrimaryKeys => "Relational C-1-1",
            NullablePrimaryKeyColumn => "Relational C-1-2",
            ScaleExceedsPrecision => "Relational C-1-3",
        }
    }

    pub fn package(self) -> CwmPackage {
        match self {
            DuplicateOwnedName | OwnershipCycle | SingleCompositeOwner | SelfConstraint
            | DuplicateFeatureName | InvalidMultiplicityRange | StereotypeBaseClass
            | DependencyEnds => CwmPackage::Core,
            DuplicateParameterName | MultipleReturnParameters | MethodOwnerMismatch => {
                CwmPackage::Behavioral
            }
            AssociationEndCount | MultipleAggregateEnds | AssociationEndOwner
            | GeneralizationCycle => CwmPackage::Relationships,
            SlotFeatureNotInClassifier | DataValueClassifier | ObjectClassifier
            | AbstractInstantiation => CwmPackage::Instance,
            AscendingRequiresSorted | KeyFeatureCountMismatch | IndexedFeatureNotInSpannedClass
            | UniqueKeyFeatureOwner => CwmPackage::KeyIndexes,
            MissingMachine | ProviderConnectionEnds => CwmPackage::SoftwareDeployment,
            DuplicateLiteralName | MultipleDefaultMembers | DiscriminatorNotMember
            | TypeAliasSelf => CwmPackage::DataTypes,
            MappingSourceEqualsTarget | MultipleBestMatches => CwmPackage::TypeMapping,
            MultiplePrimaryKeys | NullablePrimaryKeyColumn | ScaleExceedsPrecision => {
                CwmPackage::Relational
            }
        }
    }

    pub fn enforcement(self) -> Enforcement {
        match self {
            OwnershipCycle
            | SingleCompositeOwner
            | InvalidMultiplicityRange
            | GeneralizationCycle
            | TypeAliasSelf
            | MappingSourceEqualsTarget => Enforcement::Always,

            DependencyEnds
            | MethodOwnerMismatch
            | AssociationEndCount
            | SlotFeatureNotInClassifier
            | AbstractInstantiation
            | KeyFeatureCountMismatch
            | IndexedFeatureNotInSpannedClass
            | UniqueKeyFeatureOwner
            | MissingMachine
            | ProviderConnectionEnds
            | DiscriminatorNotMember
            | MultipleBestMatches
            | NullablePrimaryKeyColumn => Enforcement::Deferred,

            _ => Enforcement::Eager,
        }
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.message_en(),
            Locale::De => self.message_de(),
        }
    }

    fn message_en(self) -> &'static str {
        match self {
            DuplicateOwnedName => "Elements of the same kind owned by a namespace must have unique names",
            OwnershipCycle => "A namespace cannot directly or indirectly own itself",
            SingleCompositeOwner => "An element can have at most one composite owner",
            SelfConstraint => "A constraint cannot be applied to itself",
            DuplicateFeatureName => "No two structural features of a classifier may have the same name",
            InvalidMultiplicityRange => "Multiplicity ranges need 0 <= lower <= upper, upper >= 1, and must not overlap",
            StereotypeBaseClass => "A stereotype can only extend elements of its base class",
            DependencyEnds => "A dependency needs at least one client and one supplier",
            DuplicateParameterName => "Parameters of a behavioral feature must have unique names",
            MultipleReturnParameters => "A behavioral feature has at most one return parameter",
            MethodOwnerMismatch => "A method and the operation it implements must have the same owner",
            AssociationEndCount => "An association must have at least two association ends",
            MultipleAggregateEnds => "At most one end of an association may be an aggregate",
            AssociationEndOwner => "An association end can only be owned by an association",
            GeneralizationCycle => "Circular inheritance is not allowed",
            SlotFeatureNotInClassifier => "A slot's feature must be a feature of the object's classifier or its ancestors",
            DataValueClassifier => "A data value must be an instance of a data type",
            ObjectClassifier => "An object cannot be an instance of a data type",
            AbstractInstantiation => "An instance cannot have an abstract classifier",
            AscendingRequiresSorted => "isAscending is valid only if the index isSorted",
            KeyFeatureCountMismatch => "A key relationship must reference as many features as its unique key",
            IndexedFeatureNotInSpannedClass => "An indexed feature must belong to the class spanned by its index",
            UniqueKeyFeatureOwner => "All features of a unique key must belong to the same classifier",
            MissingMachine => "A deployed component must be deployed on a machine",
            ProviderConnectionEnds => "A provider connection needs a data provider and a distinct data manager",
            DuplicateLiteralName => "Literals of an enumeration must have unique names",
            MultipleDefaultMembers => "At most one member of a union can be the default",
            DiscriminatorNotMember => "The discriminator of a union must be one of its features",
            TypeAliasSelf => "A type alias cannot alias itself",
            MappingSourceEqualsTarget => "The source and target types of a type mapping must differ",
            MultipleBestMatches => "A source type has at most one best-match mapping into a type system",
            MultiplePrimaryKeys => "A table has at most one primary key",
            NullablePrimaryKeyColumn => "Primary key columns cannot be nullable",
            ScaleExceedsPrecision => "The scale of a column cannot exceed its precision",
        }
    }

    fn message_de(self) -> &'static str {
        match self {
            DuplicateOwnedName => "Gleichartige Elemente eines Namensraums müssen eindeutige Namen haben",
            OwnershipCycle => "Ein Namensraum kann sich weder direkt noch indirekt selbst enthalten",
            SingleCompositeOwner => "Ein Element kann höchstens einen kompositen Besitzer haben",
            SelfConstraint => "Eine Einschränkung kann nicht auf sich selbst angewendet werden",
            DuplicateFeatureName => "Strukturelle Merkmale eines Classifiers müssen eindeutige Namen haben",
            InvalidMultiplicityRange => "Multiplizitätsbereiche benötigen 0 <= untere <= obere Grenze, obere >= 1, ohne Überlappung",
            StereotypeBaseClass => "Ein Stereotyp kann nur Elemente seiner Basisklasse erweitern",
            DependencyEnds => "Eine Abhängigkeit benötigt mindestens einen Client und einen Lieferanten",
            DuplicateParameterName => "Parameter eines Verhaltensmerkmals müssen eindeutige Namen haben",
            MultipleReturnParameters => "Ein Verhaltensmerkmal hat höchstens einen Rückgabeparameter",
            MethodOwnerMismatch => "Eine Methode und ihre Operation müssen denselben Besitzer haben",
            AssociationEndCount => "Eine Assoziation benötigt mindestens zwei Assoziationsenden",
            MultipleAggregateEnds => "Höchstens ein Ende einer Assoziation darf ein Aggregat sein",
            AssociationEndOwner => "Ein Assoziationsende kann nur einer Assoziation gehören",
            GeneralizationCycle => "Zyklische Vererbung ist nicht erlaubt",
            SlotFeatureNotInClassifier => "Das Merkmal eines Slots muss zum Classifier des Objekts oder seinen Vorfahren gehören",
            DataValueClassifier => "Ein Datenwert muss eine Instanz eines Datentyps sein",
            ObjectClassifier => "Ein Objekt kann keine Instanz eines Datentyps sein",
            AbstractInstantiation => "Eine Instanz kann keinen abstrakten Classifier haben",
            AscendingRequiresSorted => "isAscending ist nur gültig, wenn der Index isSorted ist",
            KeyFeatureCountMismatch => "Eine Schlüsselbeziehung muss so viele Merkmale referenzieren wie ihr eindeutiger Schlüssel",
            IndexedFeatureNotInSpannedClass => "Ein indiziertes Merkmal muss zur vom Index überspannten Klasse gehören",
            UniqueKeyFeatureOwner => "Alle Merkmale eines eindeutigen Schlüssels müssen zum selben Classifier gehören",
            MissingMachine => "Eine installierte Komponente muss auf einer Maschine installiert sein",
            ProviderConnectionEnds => "Eine Provider-Verbindung benötigt einen Datenprovider und einen anderen Datenmanager",
            DuplicateLiteralName => "Literale einer Aufzählung müssen eindeutige Namen haben",
            MultipleDefaultMembers => "Höchstens ein Mitglied einer Union kann der Standard sein",
            DiscriminatorNotMember => "Der Diskriminator einer Union muss eines ihrer Merkmale sein",
            TypeAliasSelf => "Ein Typalias kann nicht sich selbst bezeichnen",
            MappingSourceEqualsTarget => "Quell- und Zieltyp einer Typabbildung müssen verschieden sein",
            MultipleBestMatches => "Ein Quelltyp hat höchstens eine beste Abbildung in ein Typsystem",
            MultiplePrimaryKeys => "Eine Tabelle hat höchstens einen Primärschlüssel",
            NullablePrimaryKeyColumn => "Primärschlüsselspalten dürfen nicht nullable sein",
            ScaleExceedsPrecision => "Die Skala einer Spalte darf ihre Genauigkeit nicht überschreiten",
        }
    }
}

impl fmt::Display for CwmConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
