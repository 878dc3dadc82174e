#[macro_export]
macro_rules! field_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Boolean, "boolean", strategy = Boolean),
            (Enum, "enum", strategy = Natural),
            (Frame, "frame", strategy = Natural),
            (Geo, "geo", strategy = Natural),
            (NestedFrames, "nestedFrames", strategy = Natural),
            (Number, "number", strategy = Numeric),
            (Other, "other", strategy = Natural),
            (String, "string", strategy = Text),
            (Time, "time", strategy = Time),
            (Trace, "trace", strategy = Natural),
        }
    };
}

#[macro_export]
macro_rules! field_kind_registry {
    ($macro:ident) => {
        $crate::field_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::field_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($variant:ident, $label:literal, strategy = $strategy:ident) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::FieldKind::$variant => $crate::FieldKindMetadata {
                    label: $label,
                    strategy: $crate::OrderStrategy::$strategy,
                },
            )*
        }
    };
}

macro_rules! kind_from_label_registry {
    ( @args $label:expr; @entries $( ($variant:ident, $kind_label:literal, strategy = $strategy:ident) ),* $(,)? ) => {
        match $label {
            $( $kind_label => Some($crate::FieldKind::$variant), )*
            _ => None,
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($variant:ident, $label:literal, strategy = $strategy:ident) ),* $(,)? ) => {
        [ $( $crate::FieldKind::$variant ),* ]
    };
}
