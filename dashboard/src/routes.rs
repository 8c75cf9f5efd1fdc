use crate::AppState;
use actix_web::{web, HttpResponse, Result};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/rates", web::get().to(get_rates))
        .route("/api/rates/refresh", web::post().to(refresh_rates));
}

async fn get_rates(state: web::Data<AppState>) -> Result<HttpResponse> {
    let board = state.board.lock().await.clone();
    Ok(HttpResponse::Ok().json(board))
}

async fn refresh_rates(state: web::Data<AppState>) -> Result<HttpResponse> {
    let handles = state.fetcher.spawn_cycle(state.board.clone()).await;
    Ok(HttpResponse::Accepted().json(json!({ "cycle": handles.cycle })))
}

async fn index() -> Result<HttpResponse> {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>P2P Exchange Rate</title>
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #f4f5f7; color: #333; }
        .container { max-width: 720px; margin: 40px auto; padding: 20px; }
        .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
        .card { background: white; border-radius: 12px; padding: 20px; box-shadow: 0 6px 20px rgba(0,0,0,0.08); }
        .price { font-size: 2.2rem; font-weight: 600; }
        .methods { font-size: 0.85rem; color: #777; margin-top: 8px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>P2P Exchange Rate</h1>
        <div class="grid">
            <div class="card"><h2>Buy</h2><div class="price" id="buy">Loading...</div><div class="methods" id="buy-methods"></div></div>
            <div class="card"><h2>Sell</h2><div class="price" id="sell">Loading...</div><div class="methods" id="sell-methods"></div></div>
        </div>
        <p><button onclick="refreshRates()">Refresh</button></p>
    </div>
    <script>
        function render(side, state) {
            const price = document.getElementById(side);
            if (state.loading) {
                price.textContent = 'Loading...';
            } else {
                price.textContent = state.average === null ? '-' : state.average.toFixed(2);
            }
            document.getElementById(side + '-methods').textContent = state.payment_methods.join(', ');
        }

        async function loadRates() {
            try {
                const response = await fetch('/api/rates');
                const board = await response.json();
                render('buy', board.buy);
                render('sell', board.sell);
            } catch (e) {
                console.error('Error loading rates:', e);
            }
        }

        async function refreshRates() {
            await fetch('/api/rates/refresh', { method: 'POST' });
            loadRates();
        }

        loadRates();
        setInterval(loadRates, 2000);
    </script>
</body>
</html>
"#;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use rate_fetcher::{Config, RateBoard, RateFetcher};
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    fn unreachable_state() -> web::Data<AppState> {
        let fetcher = RateFetcher::new(Config {
            api_url: "http://127.0.0.1:1/search".to_string(),
            ..Config::default()
        })
        .unwrap();
        web::Data::new(AppState {
            fetcher,
            board: Arc::new(Mutex::new(RateBoard::new())),
        })
    }

    #[actix_web::test]
    async fn idle_board_is_served_as_json() {
        let app = test::init_service(
            App::new()
                .app_data(unreachable_state())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/rates").to_request();
        let board: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(board["cycle"], 0);
        assert_eq!(board["buy"]["loading"], false);
        assert!(board["buy"]["average"].is_null());
        assert!(board["sell"]["average"].is_null());
    }

    #[actix_web::test]
    async fn refresh_starts_a_cycle_that_settles() {
        let state = unreachable_state();
        let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

        let req = test::TestRequest::post().uri("/api/rates/refresh").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["cycle"], 1);

        let mut settled = false;
        for _ in 0..100 {
            {
                let board = state.board.lock().await;
                if !board.buy.loading && !board.sell.loading {
                    assert!(board.buy.average.is_none());
                    assert!(board.sell.average.is_none());
                    settled = true;
                }
            }
            if settled {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(settled, "both sides should finish loading");
    }

    #[actix_web::test]
    async fn index_serves_html() {
        let app = test::init_service(App::new().app_data(unreachable_state()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("/api/rates"));
    }
}
