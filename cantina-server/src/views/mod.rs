//! HTML pages
//!
//! | Path | Page |
//! |------|------|
//! | / | customer menu, cart and queue position |
//! | /cozinha | kitchen tickets with status buttons |
//! | /admin/relatorio | sales report |

mod html;

use std::fmt::Write;

use axum::{Router, extract::State, response::Html, routing::get};
use shared::error::AppResult;
use shared::models::{MenuCatalog, OrderStatus};
use shared::response::{KitchenTicket, SalesReport};

use crate::core::ServerState;
use crate::orders::money::format_brl;
use crate::report::{build_kitchen_tickets, build_sales_report};

pub use html::escape;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(index))
        .route("/cozinha", get(kitchen))
        .route("/admin/relatorio", get(report))
}

async fn index(State(state): State<ServerState>) -> Html<String> {
    Html(render_index(
        &state.catalog,
        state.config.whatsapp_number.as_deref(),
    ))
}

async fn kitchen(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let orders = state.orders.list_active_orders().await?;
    let tickets = build_kitchen_tickets(&orders, state.config.business_timezone);
    Ok(Html(render_kitchen(&tickets)))
}

async fn report(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let report = state.orders.generate_report().await?;
    let sales = build_sales_report(&report, state.config.business_timezone);
    Ok(Html(render_report(&sales)))
}

/// `whatsapp` adds the "send confirmation" link once an order is placed
pub fn render_index(catalog: &MenuCatalog, whatsapp: Option<&str>) -> String {
    let mut body = String::from(r#"<section id="cardapio">"#);
    for category in catalog.categories() {
        let _ = write!(
            body,
            r#"<div class="categoria"><h2>{}</h2>"#,
            escape(&category.name)
        );
        for item in &category.items {
            let name = escape(&item.name);
            let _ = write!(
                body,
                r#"<div class="item"><span>{name}</span><span>{price} <button data-nome="{name}" data-preco="{raw}">+</button></span></div>"#,
                price = format_brl(item.price),
                raw = item.price,
            );
        }
        body.push_str("</div>");
    }
    body.push_str(
        r#"</section>
<section id="carrinho">
<h2>Seu pedido</h2>
<ul id="carrinho-itens"><li>Seu carrinho está vazio.</li></ul>
<p class="total">Total: <span id="valor-total">R$ 0,00</span></p>
<input id="nome-cliente" placeholder="Seu nome" maxlength="100">
<button id="btn-finalizar" disabled>Finalizar Pedido</button>
</section>
<section id="fila" hidden>
<h2>Pedido <span id="pedido-id"></span></h2>
<p id="fila-status"></p>
</section>"#,
    );
    if let Some(number) = whatsapp {
        let _ = write!(
            body,
            r#"<a id="btn-whatsapp" hidden target="_blank" rel="noopener" data-numero="{}">Enviar confirmação pelo WhatsApp</a>"#,
            escape(number)
        );
    }
    html::page("Cantina", &body, Some(INDEX_SCRIPT))
}

pub fn render_kitchen(tickets: &[KitchenTicket]) -> String {
    let mut body = String::new();
    if tickets.is_empty() {
        body.push_str("<p>Nenhum pedido na fila.</p>");
    }
    for ticket in tickets {
        let class = match ticket.status {
            OrderStatus::InPreparation => "ticket em-preparo",
            _ => "ticket",
        };
        let _ = write!(
            body,
            r#"<div class="{class}"><h3>#{id} · {name} <small>{time}</small></h3><p>{status}</p><ul>"#,
            id = ticket.id,
            name = escape(&ticket.nome_cliente),
            time = escape(&ticket.horario),
            status = ticket.status,
        );
        for item in &ticket.detalhes {
            let _ = write!(body, "<li>{}x {}</li>", item.qtd, escape(&item.nome));
        }
        body.push_str("</ul>");
        for status in OrderStatus::ALL {
            if status == ticket.status {
                continue;
            }
            let _ = write!(
                body,
                r#"<button data-id="{id}" data-status="{status}">{status}</button> "#,
                id = ticket.id,
            );
        }
        body.push_str("</div>");
    }
    html::page("Cozinha", &body, Some(KITCHEN_SCRIPT))
}

pub fn render_report(report: &SalesReport) -> String {
    let mut body = String::from(
        "<table><thead><tr><th>#</th><th>Cliente</th><th>Horário</th><th>Itens</th><th>Valor</th><th>Status</th></tr></thead><tbody>",
    );
    for entry in &report.pedidos {
        let row_class = if entry.status == OrderStatus::Cancelled {
            r#" class="cancelado""#
        } else {
            ""
        };
        let items = entry
            .detalhes
            .iter()
            .map(|d| escape(d.as_str()))
            .collect::<Vec<_>>()
            .join("<br>");
        let _ = write!(
            body,
            "<tr{row_class}><td>{}</td><td>{}</td><td>{}</td><td>{items}</td><td>{}</td><td>{}</td></tr>",
            entry.id,
            escape(&entry.nome_cliente),
            escape(&entry.horario),
            escape(&entry.valor_total),
            entry.status,
        );
    }
    let _ = write!(
        body,
        r#"</tbody></table><p class="total">Conta final: {}</p>"#,
        escape(&report.conta_final)
    );
    html::page("Relatório de Vendas", &body, None)
}

const INDEX_SCRIPT: &str = r#"
const carrinho = new Map();
const brl = v => 'R$ ' + v.toFixed(2).replace('.', ',');
const nome = document.getElementById('nome-cliente');
const finalizar = document.getElementById('btn-finalizar');

function atualizar() {
  const lista = document.getElementById('carrinho-itens');
  lista.innerHTML = '';
  let total = 0;
  for (const [item, qtd] of carrinho) {
    total += item.preco * qtd;
    const li = document.createElement('li');
    li.textContent = `${qtd}x ${item.nome} `;
    const menos = document.createElement('button');
    menos.textContent = '-';
    menos.onclick = () => { const q = carrinho.get(item) - 1; q > 0 ? carrinho.set(item, q) : carrinho.delete(item); atualizar(); };
    li.appendChild(menos);
    lista.appendChild(li);
  }
  if (carrinho.size === 0) lista.innerHTML = '<li>Seu carrinho está vazio.</li>';
  document.getElementById('valor-total').textContent = brl(total);
  finalizar.disabled = carrinho.size === 0 || nome.value.trim() === '';
}

const itens = new Map();
document.querySelectorAll('#cardapio button').forEach(btn => {
  btn.onclick = () => {
    const key = btn.dataset.nome;
    if (!itens.has(key)) itens.set(key, { nome: key, preco: parseFloat(btn.dataset.preco) });
    const item = itens.get(key);
    carrinho.set(item, (carrinho.get(item) || 0) + 1);
    atualizar();
  };
});
nome.oninput = atualizar;

async function verificarFila(id) {
  const resp = await fetch(`/api/fila/${id}`);
  const fila = await resp.json();
  const status = document.getElementById('fila-status');
  if (fila.posicao) {
    status.textContent = `Posição na fila: ${fila.posicao}º (de ${fila.total_fila})`;
  } else {
    status.textContent = 'Seu pedido está pronto! Dirija-se ao balcão.';
    return true;
  }
  return false;
}

finalizar.onclick = async () => {
  finalizar.disabled = true;
  const payload = {
    nome_cliente: nome.value.trim(),
    itens: [...carrinho].map(([item, qtd]) => ({ nome: item.nome, quantidade: qtd })),
  };
  const resp = await fetch('/api/pedido', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(payload),
  });
  const resultado = await resp.json();
  if (!resultado.success) {
    alert('Erro ao finalizar pedido: ' + resultado.mensagem);
    atualizar();
    return;
  }
  const id = resultado.id_pedido;
  const whatsapp = document.getElementById('btn-whatsapp');
  if (whatsapp) {
    const resumo = [...carrinho].map(([item, qtd]) => `${qtd}x ${item.nome}`).join('\n');
    const mensagem = `*--- PEDIDO CONFIRMADO ---*\nCliente: ${payload.nome_cliente}\nID do Pedido: #${id}\nTotal: ${document.getElementById('valor-total').textContent}\n\n*Itens:*\n${resumo}\n\nAcompanhe sua posição na fila: ${location.href}\nObrigado!`;
    whatsapp.href = `https://wa.me/${whatsapp.dataset.numero}?text=${encodeURIComponent(mensagem)}`;
    whatsapp.hidden = false;
  }
  carrinho.clear();
  document.getElementById('cardapio').hidden = true;
  document.getElementById('carrinho').hidden = true;
  document.getElementById('fila').hidden = false;
  document.getElementById('pedido-id').textContent = `#${id}`;
  if (!(await verificarFila(id))) {
    const timer = setInterval(async () => { if (await verificarFila(id)) clearInterval(timer); }, 5000);
  }
};
"#;

const KITCHEN_SCRIPT: &str = r#"
document.querySelectorAll('button[data-status]').forEach(btn => {
  btn.onclick = async () => {
    const resp = await fetch('/cozinha/update_status', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ pedido_id: Number(btn.dataset.id), status: btn.dataset.status }),
    });
    const resultado = await resp.json();
    if (!resultado.success) alert(resultado.mensagem);
    location.reload();
  };
});
setTimeout(() => location.reload(), 15000);
"#;
