use actix_web::web;

pub mod backend_health;
pub mod league;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/league")
            .service(league::get_standings)
            .service(league::get_team_standing)
            .service(league::list_results)
            .service(league::record_result)
            .service(league::delete_result)
            .service(league::list_teams)
            .service(league::create_team)
            .service(league::delete_team)
            .service(league::list_players)
            .service(league::create_player)
            .service(league::delete_player)
            .service(league::list_schedule)
            .service(league::create_fixture)
            .service(league::delete_fixture)
    );
}
