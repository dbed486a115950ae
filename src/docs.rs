use utoipa::OpenApi;

use crate::modules::announcements::model::{
    Announcement, AnnouncementEnvelope, AnnouncementsListResponse, CreateAnnouncementDto,
};
use crate::modules::attendance::model::{
    Attendance, AttendanceEnvelope, AttendanceListResponse, MarkAttendanceDto,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, RegisterRequestDto};
use crate::modules::classes::model::{
    Class, ClassEnvelope, ClassesListResponse, CreateClassDto, EnrollStudentDto, Enrollment,
    EnrollmentEnvelope,
};
use crate::modules::grades::model::{Grade, GradeEnvelope, GradesListResponse, RecordGradeDto};
use crate::modules::users::model::{
    Role, UpdateStaffDetailsDto, UpdateStudentDetailsDto, User, UserEnvelope, UsersListResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_staff_details,
        crate::modules::users::controller::update_student_details,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::enroll_student,
        crate::modules::attendance::controller::mark_attendance,
        crate::modules::attendance::controller::get_class_attendance,
        crate::modules::grades::controller::record_grade,
        crate::modules::grades::controller::get_student_grades,
        crate::modules::announcements::controller::create_announcement,
        crate::modules::announcements::controller::get_announcements,
    ),
    components(
        schemas(
            Role,
            User,
            UserEnvelope,
            UsersListResponse,
            UpdateStaffDetailsDto,
            UpdateStudentDetailsDto,
            RegisterRequestDto,
            LoginRequest,
            AuthResponse,
            ErrorResponse,
            Class,
            CreateClassDto,
            ClassEnvelope,
            ClassesListResponse,
            Enrollment,
            EnrollStudentDto,
            EnrollmentEnvelope,
            Attendance,
            MarkAttendanceDto,
            AttendanceEnvelope,
            AttendanceListResponse,
            Grade,
            RecordGradeDto,
            GradeEnvelope,
            GradesListResponse,
            Announcement,
            CreateAnnouncementDto,
            AnnouncementEnvelope,
            AnnouncementsListResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Registration and credential login"),
        (name = "Users", description = "Account listing and role-gated profile updates"),
        (name = "Classes", description = "Classes and enrollments"),
        (name = "Attendance", description = "Per-day attendance records"),
        (name = "Grades", description = "Grades with derived letter"),
        (name = "Announcements", description = "Campus announcements")
    ),
    info(
        title = "CampusMedia API",
        description = "Campus-management backend: role-based accounts, profiles, and academic records",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
