//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Staff accounts managing a dormitory.
    dormitory_managers (id) {
        id -> Int8,
        name -> Varchar,
        phone -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        password -> Varchar,
    }
}

diesel::table! {
    /// Dormitory buildings. `manager_id` is unique: one building per manager.
    dormitories (id) {
        id -> Int8,
        building_num -> Nullable<Varchar>,
        building_name -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        phone_num -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        manager_id -> Nullable<Int8>,
    }
}

diesel::table! {
    /// Rooms keyed by number within a dormitory.
    rooms (room_num, dormitory_id) {
        room_num -> Varchar,
        dormitory_id -> Int8,
        floor -> Nullable<Int4>,
        room_type -> Nullable<Varchar>,
        block -> Nullable<Varchar>,
        /// Number of students assigned; constrained to 0..=2.
        occupancy -> Int4,
        last_inspect -> Nullable<Varchar>,
        duration -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Students; `room_num` and `dormitory_id` are both set or both null.
    students (id) {
        id -> Int8,
        name -> Varchar,
        major -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        phone_num -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        password -> Varchar,
        room_num -> Nullable<Varchar>,
        dormitory_id -> Nullable<Int8>,
        roommate_id -> Nullable<Int8>,
    }
}

diesel::table! {
    announcements (id) {
        id -> Int8,
        title -> Varchar,
        description -> Varchar,
        date_time -> Timestamptz,
        manager_id -> Int8,
    }
}

diesel::table! {
    complaint_repairs (id) {
        id -> Int8,
        description -> Varchar,
        service_type -> Nullable<Varchar>,
        date_time -> Timestamptz,
        priority_lvl -> Nullable<Varchar>,
        status -> Varchar,
        student_id -> Int8,
    }
}

diesel::table! {
    check_in_outs (id) {
        id -> Int8,
        student_id -> Int8,
        date -> Date,
        #[sql_name = "type"]
        kind -> Varchar,
        status -> Varchar,
    }
}

diesel::joinable!(dormitories -> dormitory_managers (manager_id));
diesel::joinable!(announcements -> dormitory_managers (manager_id));
diesel::joinable!(complaint_repairs -> students (student_id));
diesel::joinable!(check_in_outs -> students (student_id));

diesel::allow_tables_to_appear_in_same_query!(
    dormitory_managers,
    dormitories,
    rooms,
    students,
    announcements,
    complaint_repairs,
    check_in_outs,
);
