// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod snapshot_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod adjustment_kind_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod money_amount_model;
        pub(crate) mod payment_status_model;
        pub(crate) mod snapshot_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod calendar;
        pub(crate) mod fee_policy;
        pub(crate) mod ids;
        pub(crate) mod ledger;
        pub(crate) mod matrix;
        pub(crate) mod outcome;
        pub(crate) mod owner;
        pub(crate) mod payment;
        pub(crate) mod property;
    }
    pub(crate) mod logic {
        pub(crate) mod collection_builder;
        pub(crate) mod fee_calculator;
        pub(crate) mod outcome_builder;
        pub(crate) mod payment_processor;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod collection_usecase;
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod matrix_csv;
    pub(crate) mod report_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::calendar::*;
        pub use crate::domain::entities::fee_policy::*;
        pub use crate::domain::entities::ids::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::matrix::*;
        pub use crate::domain::entities::outcome::*;
        pub use crate::domain::entities::owner::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::property::*;
    }

    pub mod logic {
        pub use crate::domain::logic::fee_calculator::{adjusted_fee, month_category};
    }

    pub mod repositories {
        pub use crate::domain::repositories::ledger_repository::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::collection_usecase::CollectionUsecase;
        pub use crate::domain::usecases::report_usecase::ReportUsecase;
    }
}
